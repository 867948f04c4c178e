//! Symptom severity weights and the red-flag vocabulary.
//!
//! Both tables are plain data keyed by lower-case phrase. Matching is an
//! exact lookup first, then a guarded substring fallback: short keys such as
//! "gas" would otherwise fire inside unrelated words.

/// Shortest table key allowed to match by substring.
pub const MIN_SUBSTRING_KEY_LEN: usize = 4;

/// Shortest red-flag term allowed to match.
pub const MIN_RED_FLAG_TERM_LEN: usize = 5;

/// Weight for anything the table does not know.
pub const DEFAULT_WEIGHT: u8 = 1;

/// 1 = mild, 2 = moderate, 3 = severe.
pub const SEVERITY_TABLE: &[(&str, u8)] = &[
    ("nausea", 1),
    ("morning sickness", 1),
    ("vomiting", 2),
    ("fatigue", 1),
    ("tired", 1),
    ("exhaustion", 2),
    ("headache", 2),
    ("migraine", 3),
    ("back pain", 2),
    ("backache", 2),
    ("sciatica", 2),
    ("hip pain", 2),
    ("pelvic pain", 2),
    ("round ligament pain", 1),
    ("insomnia", 1),
    ("heartburn", 1),
    ("acid reflux", 1),
    ("indigestion", 1),
    ("constipation", 1),
    ("bloating", 1),
    ("gas", 1),
    ("cramps", 2),
    ("cramping", 2),
    ("leg cramps", 1),
    ("swelling", 2),
    ("dizziness", 2),
    ("shortness of breath", 3),
    ("contractions", 3),
    ("spotting", 3),
    ("bleeding", 3),
    ("anxiety", 2),
    ("mood swings", 1),
    ("breast tenderness", 1),
    ("frequent urination", 1),
    ("hemorrhoids", 1),
    ("congestion", 1),
    ("nosebleeds", 2),
    ("food aversion", 1),
    ("cravings", 1),
];

pub const RED_FLAG_TERMS: &[&str] = &[
    "bleeding",
    "severe pain",
    "severe headache",
    "severe cramping",
    "vision changes",
    "blurred vision",
    "decreased fetal movement",
    "reduced fetal movement",
    "fluid leaking",
    "leaking fluid",
    "high fever",
    "chest pain",
    "difficulty breathing",
    "sudden swelling",
    "seizure",
    "fainting",
    "thoughts of self-harm",
];

/// Severity weight for a symptom phrase.
///
/// Exact case-insensitive match wins. Otherwise every table key of at least
/// [`MIN_SUBSTRING_KEY_LEN`] characters contained in the phrase is a
/// candidate and the heaviest candidate is used.
pub fn symptom_weight(symptom: &str) -> u8 {
    let normalized = symptom.trim().to_lowercase();
    if normalized.is_empty() {
        return DEFAULT_WEIGHT;
    }

    if let Some((_, weight)) = SEVERITY_TABLE.iter().find(|(key, _)| *key == normalized) {
        return *weight;
    }

    SEVERITY_TABLE
        .iter()
        .filter(|(key, _)| key.len() >= MIN_SUBSTRING_KEY_LEN && normalized.contains(key))
        .map(|(_, weight)| *weight)
        .max()
        .unwrap_or(DEFAULT_WEIGHT)
}

pub fn is_red_flag(symptom: &str) -> bool {
    matches_red_flag(symptom, RED_FLAG_TERMS)
}

/// Terms shorter than [`MIN_RED_FLAG_TERM_LEN`] never match.
pub fn matches_red_flag(symptom: &str, terms: &[&str]) -> bool {
    let normalized = symptom.trim().to_lowercase();
    terms
        .iter()
        .filter(|term| term.len() >= MIN_RED_FLAG_TERM_LEN)
        .any(|term| normalized.contains(&term.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(symptom_weight("Migraine"), 3);
        assert_eq!(symptom_weight("  BACK PAIN "), 2);
        assert_eq!(symptom_weight("nausea"), 1);
    }

    #[test]
    fn substring_fallback_uses_long_keys() {
        assert_eq!(symptom_weight("bad headache at night"), 2);
        assert_eq!(symptom_weight("light spotting today"), 3);
    }

    #[test]
    fn short_keys_do_not_match_inside_other_words() {
        // "gas" sits inside "vegas"; too short to count as a substring hit.
        assert_eq!(symptom_weight("missing vegas"), DEFAULT_WEIGHT);
        assert_eq!(symptom_weight("gas"), 1);
    }

    #[test]
    fn heaviest_substring_candidate_wins() {
        // Contains both "cramps" (2) and "leg cramps" (1).
        assert_eq!(symptom_weight("leg cramps again"), 2);
    }

    #[test]
    fn unknown_symptoms_default_to_mild() {
        assert_eq!(symptom_weight("itchy elbows"), DEFAULT_WEIGHT);
        assert_eq!(symptom_weight(""), DEFAULT_WEIGHT);
    }

    #[test]
    fn red_flags_match_by_containment() {
        assert!(is_red_flag("bleeding"));
        assert!(is_red_flag("Some BLURRED VISION this morning"));
        assert!(is_red_flag("decreased fetal movement"));
        assert!(!is_red_flag("nausea"));
        assert!(!is_red_flag("back pain"));
    }

    #[test]
    fn short_red_flag_terms_are_ignored() {
        let terms = ["pain", "clot", "severe pain"];
        assert!(!matches_red_flag("back pain", &terms));
        assert!(!matches_red_flag("clotting", &terms));
        assert!(matches_red_flag("Severe pain in side", &terms));
    }

    #[test]
    fn five_letter_terms_pass_the_guard() {
        assert!(matches_red_flag("a high fever", &["fever"]));
    }
}
