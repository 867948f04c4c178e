use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_with_limit;
use crate::config::EngineConfig;
use crate::models::{
    CheckIn, Stage, Suggestion, SuggestionContext, SymptomAnalysis, TrendDeltas, WeekAggregate,
    WeekTrends,
};
use crate::suggestions::generate_with;
use crate::symptoms::analyze_with;
use crate::trends::{classify, compare_weeks};
use crate::window::{days_logged, split_weeks, week_bounds, WeekWindow};

/// Caller-supplied facts the check-ins cannot tell us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightInputs {
    pub stage: Stage,
    pub appointment_upcoming: bool,
    pub today: NaiveDate,
}

/// Everything the partner summary shows for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyInsights {
    pub window: WeekWindow,
    pub stage: Stage,
    pub current: WeekAggregate,
    pub previous: WeekAggregate,
    pub deltas: TrendDeltas,
    pub trends: WeekTrends,
    pub analysis: SymptomAnalysis,
    pub days_logged: Option<u32>,
    pub suggestions: Vec<Suggestion>,
}

/// Windows raw check-ins around `inputs.today` and runs the full pipeline.
pub fn build_insights(
    checkins: &[CheckIn],
    inputs: &InsightInputs,
    config: &EngineConfig,
) -> WeeklyInsights {
    let (current, previous) = split_weeks(checkins, inputs.today);
    let current_week = aggregate_with_limit(&current, config.top_symptom_limit);
    let previous_week = aggregate_with_limit(&previous, config.top_symptom_limit);
    insights_from_aggregates(
        current_week,
        previous_week,
        Some(days_logged(&current)),
        inputs,
        config,
    )
}

/// Same pipeline, starting from an aggregate pair computed elsewhere.
pub fn insights_from_aggregates(
    current: WeekAggregate,
    previous: WeekAggregate,
    days_logged: Option<u32>,
    inputs: &InsightInputs,
    config: &EngineConfig,
) -> WeeklyInsights {
    let deltas = compare_weeks(&current, &previous);
    let trends = classify(&deltas);
    let analysis = analyze_with(&current.top_symptoms, config);

    let suggestions = generate_with(
        &SuggestionContext {
            aggregate: &current,
            stage: inputs.stage,
            appointment_upcoming: inputs.appointment_upcoming,
            deltas: Some(&deltas),
            days_logged,
            analysis: &analysis,
            today: inputs.today,
        },
        config,
    );

    let (window, _) = week_bounds(inputs.today);
    tracing::debug!(
        start = %window.start,
        end = %window.end,
        suggestions = suggestions.len(),
        "built weekly insights"
    );

    WeeklyInsights {
        window,
        stage: inputs.stage,
        current,
        previous,
        deltas,
        trends,
        analysis,
        days_logged,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Mood, SuggestionKind};

    fn checkin(date: NaiveDate, mood: Mood, symptoms: &str) -> CheckIn {
        CheckIn {
            date,
            mood: Some(mood),
            energy: None,
            symptoms: symptoms.to_string(),
            slot: None,
        }
    }

    fn inputs(today: NaiveDate) -> InsightInputs {
        InsightInputs {
            stage: Stage::Pregnancy { trimester: 3 },
            appointment_upcoming: false,
            today,
        }
    }

    #[test]
    fn pipeline_compares_against_prior_week() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let last_week = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let checkins = vec![
            checkin(today, Mood::Sad, "back pain"),
            checkin(today, Mood::Sad, "back pain"),
            checkin(last_week, Mood::Happy, ""),
        ];

        let insights = build_insights(&checkins, &inputs(today), &EngineConfig::default());

        assert_eq!(insights.current.total_checkins, 2);
        assert_eq!(insights.previous.total_checkins, 1);
        assert_eq!(insights.days_logged, Some(1));
        assert_eq!(insights.trends.mood, Direction::Down);
        let kinds: Vec<SuggestionKind> = insights.suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(kinds[0], SuggestionKind::ToughWeek);
        assert!(kinds.contains(&SuggestionKind::EmotionalSupport));
    }

    #[test]
    fn no_data_still_produces_guidance() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let insights = build_insights(&[], &inputs(today), &EngineConfig::default());
        assert_eq!(insights.current, WeekAggregate::default());
        assert_eq!(insights.suggestions.len(), 2);
        assert_eq!(insights.suggestions[0].kind, SuggestionKind::StageGuidance);
    }
}
