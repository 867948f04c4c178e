use std::collections::HashMap;

use crate::models::{CheckIn, Energy, EnergyCounts, Mood, MoodCounts, SymptomCount, WeekAggregate};

pub const DEFAULT_TOP_SYMPTOMS: usize = 3;

/// Lower-case, trimmed form used for all symptom matching.
pub fn normalize_symptom(symptom: &str) -> String {
    symptom.trim().to_lowercase()
}

/// First letter upper-cased; display only.
pub fn display_symptom(symptom: &str) -> String {
    let mut chars = symptom.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Comma-separated free text into normalized, non-empty fragments.
pub fn split_symptoms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(',')
        .map(normalize_symptom)
        .filter(|fragment| !fragment.is_empty())
}

pub fn aggregate(checkins: &[CheckIn]) -> WeekAggregate {
    aggregate_with_limit(checkins, DEFAULT_TOP_SYMPTOMS)
}

pub fn aggregate_with_limit(checkins: &[CheckIn], top_limit: usize) -> WeekAggregate {
    let mut summary = WeekAggregate {
        total_checkins: checkins.len() as u32,
        ..WeekAggregate::default()
    };

    // Counts kept in first-seen order so equal counts stay stable after sorting.
    let mut symptom_index: HashMap<String, usize> = HashMap::new();
    let mut symptom_counts: Vec<(String, u32)> = Vec::new();

    for checkin in checkins {
        if let Some(mood) = checkin.mood {
            summary.mood_counts.increment(mood);
        }
        if let Some(energy) = checkin.energy {
            summary.energy_counts.increment(energy);
        }
        if let Some(slot) = checkin.slot {
            summary.slot_counts.increment(slot);
        }

        for symptom in split_symptoms(&checkin.symptoms) {
            match symptom_index.get(&symptom) {
                Some(&idx) => symptom_counts[idx].1 += 1,
                None => {
                    symptom_index.insert(symptom.clone(), symptom_counts.len());
                    symptom_counts.push((symptom, 1));
                }
            }
        }
    }

    symptom_counts.sort_by(|a, b| b.1.cmp(&a.1));
    summary.top_symptoms = symptom_counts
        .into_iter()
        .take(top_limit)
        .map(|(symptom, count)| SymptomCount {
            symptom: display_symptom(&symptom),
            count,
        })
        .collect();

    summary.dominant_mood = dominant_mood(&summary.mood_counts);
    summary.dominant_energy = dominant_energy(&summary.energy_counts);

    tracing::debug!(
        total = summary.total_checkins,
        dominant_mood = ?summary.dominant_mood,
        dominant_energy = ?summary.dominant_energy,
        symptoms = summary.top_symptoms.len(),
        "aggregated week"
    );

    summary
}

/// Highest non-zero count; ties go to the earlier of happy, neutral, sad.
pub fn dominant_mood(counts: &MoodCounts) -> Option<Mood> {
    pick_dominant(Mood::ALL.iter().map(|mood| (*mood, counts.get(*mood))))
}

/// Highest non-zero count; ties go to the earlier of high, medium, low.
pub fn dominant_energy(counts: &EnergyCounts) -> Option<Energy> {
    pick_dominant(Energy::ALL.iter().map(|energy| (*energy, counts.get(*energy))))
}

fn pick_dominant<T>(entries: impl Iterator<Item = (T, u32)>) -> Option<T> {
    let mut best: Option<(T, u32)> = None;
    for (value, count) in entries {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn checkin(mood: Option<Mood>, energy: Option<Energy>, symptoms: &str) -> CheckIn {
        CheckIn {
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            mood,
            energy,
            symptoms: symptoms.to_string(),
            slot: None,
        }
    }

    #[test]
    fn counts_moods_and_top_symptoms() {
        let checkins = vec![
            checkin(Some(Mood::Sad), None, "nausea, headache"),
            checkin(Some(Mood::Sad), None, "nausea"),
        ];
        let week = aggregate(&checkins);

        assert_eq!(week.total_checkins, 2);
        assert_eq!(
            week.mood_counts,
            MoodCounts {
                happy: 0,
                neutral: 0,
                sad: 2
            }
        );
        assert_eq!(week.dominant_mood, Some(Mood::Sad));
        assert_eq!(
            week.top_symptoms,
            vec![
                SymptomCount {
                    symptom: "Nausea".to_string(),
                    count: 2
                },
                SymptomCount {
                    symptom: "Headache".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn empty_input_yields_zeroed_week() {
        let week = aggregate(&[]);
        assert_eq!(week.total_checkins, 0);
        assert_eq!(week.mood_counts.total(), 0);
        assert_eq!(week.energy_counts.total(), 0);
        assert_eq!(week.dominant_mood, None);
        assert_eq!(week.dominant_energy, None);
        assert!(week.top_symptoms.is_empty());
    }

    #[test]
    fn symptom_fragments_are_normalized_and_blank_ones_dropped() {
        let checkins = vec![
            checkin(None, None, " Back Pain ,, ,BACK PAIN"),
            checkin(None, None, ""),
        ];
        let week = aggregate(&checkins);
        assert_eq!(week.top_symptoms.len(), 1);
        assert_eq!(week.top_symptoms[0].symptom, "Back pain");
        assert_eq!(week.top_symptoms[0].count, 2);
    }

    #[test]
    fn top_symptoms_are_capped_and_ties_keep_first_seen_order() {
        let checkins = vec![
            checkin(None, None, "heartburn, cramps, bloating, gas"),
            checkin(None, None, "gas"),
        ];
        let week = aggregate(&checkins);
        let names: Vec<&str> = week
            .top_symptoms
            .iter()
            .map(|s| s.symptom.as_str())
            .collect();
        assert_eq!(names, vec!["Gas", "Heartburn", "Cramps"]);
    }

    #[test]
    fn dominant_ties_resolve_in_enumeration_order() {
        let checkins = vec![
            checkin(Some(Mood::Sad), Some(Energy::Low), ""),
            checkin(Some(Mood::Neutral), Some(Energy::Medium), ""),
        ];
        let week = aggregate(&checkins);
        assert_eq!(week.dominant_mood, Some(Mood::Neutral));
        assert_eq!(week.dominant_energy, Some(Energy::Medium));
    }

    #[test]
    fn missing_fields_do_not_count() {
        let mut record = checkin(None, None, "");
        record.slot = Some(TimeSlot::Night);
        let week = aggregate(&[record]);
        assert_eq!(week.total_checkins, 1);
        assert_eq!(week.mood_counts.total(), 0);
        assert_eq!(week.slot_counts.night, 1);
        assert_eq!(week.dominant_mood, None);
    }

    #[test]
    fn display_symptom_only_touches_first_letter() {
        assert_eq!(display_symptom("back pain"), "Back pain");
        assert_eq!(display_symptom(""), "");
    }

    fn arb_checkin() -> impl Strategy<Value = CheckIn> {
        (
            prop::option::of(prop::sample::select(Mood::ALL.to_vec())),
            prop::option::of(prop::sample::select(Energy::ALL.to_vec())),
            prop::collection::vec(
                prop::sample::select(vec!["nausea", "Headache", "back pain", " ", "gas"]),
                0..4,
            ),
        )
            .prop_map(|(mood, energy, symptoms)| checkin(mood, energy, &symptoms.join(",")))
    }

    proptest! {
        #[test]
        fn aggregation_is_idempotent(checkins in prop::collection::vec(arb_checkin(), 0..30)) {
            prop_assert_eq!(aggregate(&checkins), aggregate(&checkins));
        }

        #[test]
        fn mood_counts_are_conserved(checkins in prop::collection::vec(arb_checkin(), 0..30)) {
            let week = aggregate(&checkins);
            let with_mood = checkins.iter().filter(|c| c.mood.is_some()).count() as u32;
            prop_assert_eq!(week.mood_counts.total(), with_mood);
        }

        #[test]
        fn dominant_mood_is_strict_maximum(checkins in prop::collection::vec(arb_checkin(), 0..30)) {
            let week = aggregate(&checkins);
            match week.dominant_mood {
                None => prop_assert_eq!(week.mood_counts.total(), 0),
                Some(mood) => {
                    let best = week.mood_counts.get(mood);
                    for other in Mood::ALL {
                        let count = week.mood_counts.get(other);
                        prop_assert!(count <= best);
                        // Earlier moods with the same count would have won.
                        if Mood::ALL.iter().position(|m| *m == other)
                            < Mood::ALL.iter().position(|m| *m == mood)
                        {
                            prop_assert!(count < best);
                        }
                    }
                }
            }
        }
    }
}
