use crate::config::EngineConfig;
use crate::models::{SymptomAnalysis, SymptomCount, WeightedSymptom};
use crate::severity::{is_red_flag, symptom_weight};

pub fn analyze(top_symptoms: &[SymptomCount]) -> SymptomAnalysis {
    analyze_with(top_symptoms, &EngineConfig::default())
}

/// Weighs each symptom, flags red-flag phrases and buckets the week.
pub fn analyze_with(top_symptoms: &[SymptomCount], config: &EngineConfig) -> SymptomAnalysis {
    let mut weighted_symptoms: Vec<WeightedSymptom> = top_symptoms
        .iter()
        .map(|entry| {
            let weight = symptom_weight(&entry.symptom);
            WeightedSymptom {
                symptom: entry.symptom.clone(),
                count: entry.count,
                weight,
                score: weight as u32 * entry.count,
            }
        })
        .collect();
    weighted_symptoms.sort_by(|a, b| b.score.cmp(&a.score));

    let total_score: u32 = weighted_symptoms.iter().map(|s| s.score).sum();
    let total_count: u32 = weighted_symptoms.iter().map(|s| s.count).sum();
    let average_weight = if total_count == 0 {
        0.0
    } else {
        total_score as f64 / total_count as f64
    };

    let red_flag_symptoms: Vec<String> = top_symptoms
        .iter()
        .filter(|entry| is_red_flag(&entry.symptom))
        .map(|entry| entry.symptom.clone())
        .collect();

    let analysis = SymptomAnalysis {
        weighted_symptoms,
        total_score,
        average_weight,
        has_red_flags: !red_flag_symptoms.is_empty(),
        red_flag_symptoms,
        severity_level: config.severity_for(total_score),
    };

    tracing::debug!(
        total_score = analysis.total_score,
        severity = ?analysis.severity_level,
        red_flags = analysis.red_flag_symptoms.len(),
        "analyzed symptoms"
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityLevel;
    use proptest::prelude::*;

    fn symptom(name: &str, count: u32) -> SymptomCount {
        SymptomCount {
            symptom: name.to_string(),
            count,
        }
    }

    #[test]
    fn bleeding_is_a_red_flag() {
        let analysis = analyze(&[symptom("bleeding", 1)]);
        assert!(analysis.has_red_flags);
        assert_eq!(analysis.red_flag_symptoms, vec!["bleeding".to_string()]);
    }

    #[test]
    fn scores_are_weight_times_count_sorted_descending() {
        let analysis = analyze(&[symptom("Nausea", 3), symptom("Migraine", 2)]);
        let scores: Vec<(&str, u32)> = analysis
            .weighted_symptoms
            .iter()
            .map(|s| (s.symptom.as_str(), s.score))
            .collect();
        assert_eq!(scores, vec![("Migraine", 6), ("Nausea", 3)]);
        assert_eq!(analysis.total_score, 9);
        assert!((analysis.average_weight - 9.0 / 5.0).abs() < 1e-9);
        assert_eq!(analysis.severity_level, SeverityLevel::Moderate);
        assert!(!analysis.has_red_flags);
    }

    #[test]
    fn no_symptoms_is_a_light_week() {
        let analysis = analyze(&[]);
        assert!(analysis.weighted_symptoms.is_empty());
        assert_eq!(analysis.total_score, 0);
        assert_eq!(analysis.average_weight, 0.0);
        assert_eq!(analysis.severity_level, SeverityLevel::Light);
        assert!(!analysis.has_red_flags);
    }

    #[test]
    fn heavy_week_crosses_upper_threshold() {
        let analysis = analyze(&[symptom("Migraine", 3), symptom("Vomiting", 2)]);
        assert_eq!(analysis.total_score, 13);
        assert_eq!(analysis.severity_level, SeverityLevel::Heavy);
    }

    #[test]
    fn custom_thresholds_apply() {
        let config = EngineConfig {
            light_max: 1,
            moderate_max: 2,
            ..EngineConfig::default()
        };
        let analysis = analyze_with(&[symptom("Nausea", 3)], &config);
        assert_eq!(analysis.severity_level, SeverityLevel::Heavy);
    }

    proptest! {
        #[test]
        fn raising_a_count_never_lowers_the_score(
            counts in prop::collection::vec(1u32..10, 1..4),
            which in 0usize..3,
            bump in 1u32..5,
        ) {
            let names = ["nausea", "migraine", "back pain"];
            let before: Vec<SymptomCount> = counts
                .iter()
                .zip(names)
                .map(|(count, name)| symptom(name, *count))
                .collect();
            let mut after = before.clone();
            let idx = which % after.len();
            after[idx].count += bump;

            let a = analyze(&before);
            let b = analyze(&after);
            prop_assert!(b.total_score >= a.total_score);
            prop_assert!(b.severity_level >= a.severity_level);
        }

        #[test]
        fn severity_is_monotonic_in_score(x in 0u32..40, y in 0u32..40) {
            let config = EngineConfig::default();
            let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
            prop_assert!(config.severity_for(lo) <= config.severity_for(hi));
        }
    }
}
