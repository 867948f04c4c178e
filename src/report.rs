use std::fmt::Write;

use crate::insights::WeeklyInsights;
use crate::models::{Direction, SeverityLevel, Stage, SymptomCount};

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "up",
        Direction::Down => "down",
        Direction::Stable => "steady",
    }
}

fn stage_label(stage: Stage) -> String {
    match stage {
        Stage::Pregnancy { trimester } => format!("trimester {trimester}"),
        Stage::Postpartum { week } => format!("postpartum week {week}"),
    }
}

fn symptom_list(symptoms: &[SymptomCount]) -> String {
    if symptoms.is_empty() {
        return "None".to_string();
    }
    symptoms
        .iter()
        .map(|s| format!("{} ({})", s.symptom, s.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Markdown summary for the partner view.
pub fn build_report(insights: &WeeklyInsights) -> String {
    let week = &insights.current;
    let mut output = String::new();

    let _ = writeln!(output, "# Weekly Insights");
    let _ = writeln!(
        output,
        "Week of {} to {} ({})",
        insights.window.start,
        insights.window.end,
        stage_label(insights.stage)
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## This Week at a Glance");

    if week.total_checkins == 0 {
        let _ = writeln!(output, "No check-ins yet.");
    } else {
        let days = insights
            .days_logged
            .map(|d| format!(" across {d} days"))
            .unwrap_or_default();
        let _ = writeln!(output, "- Check-ins: {}{}", week.total_checkins, days);
        let _ = writeln!(
            output,
            "- Mood: {} happy, {} neutral, {} sad (mostly {})",
            week.mood_counts.happy,
            week.mood_counts.neutral,
            week.mood_counts.sad,
            week.dominant_mood.map(|m| m.label()).unwrap_or("None")
        );
        let _ = writeln!(
            output,
            "- Energy: {} high, {} medium, {} low (mostly {})",
            week.energy_counts.high,
            week.energy_counts.medium,
            week.energy_counts.low,
            week.dominant_energy.map(|e| e.label()).unwrap_or("None")
        );
        let _ = writeln!(output, "- Top symptoms: {}", symptom_list(&week.top_symptoms));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Compared to Last Week");

    if insights.previous.total_checkins == 0 {
        let _ = writeln!(output, "No check-ins last week to compare against.");
    } else {
        let trends = &insights.trends;
        let _ = writeln!(output, "- Mood: {}", direction_label(trends.mood));
        let _ = writeln!(output, "- Energy: {}", direction_label(trends.energy));
        let _ = writeln!(output, "- Symptoms: {}", direction_label(trends.symptoms));
        let _ = writeln!(
            output,
            "- Overall wellbeing: {}",
            direction_label(trends.overall_wellbeing)
        );
        let changes = &insights.deltas.symptoms;
        if !changes.new.is_empty() {
            let _ = writeln!(output, "- New this week: {}", symptom_list(&changes.new));
        }
        if !changes.gone.is_empty() {
            let _ = writeln!(output, "- No longer logged: {}", symptom_list(&changes.gone));
        }
    }

    let analysis = &insights.analysis;
    let _ = writeln!(output);
    let _ = writeln!(output, "## Symptoms");

    if analysis.has_red_flags {
        let _ = writeln!(
            output,
            "> **Worth a call to the provider:** {}",
            analysis.red_flag_symptoms.join(", ")
        );
    }

    if analysis.weighted_symptoms.is_empty() {
        let _ = writeln!(output, "No symptoms logged.");
    } else {
        let level = match analysis.severity_level {
            SeverityLevel::Light => "light",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Heavy => "heavy",
        };
        let _ = writeln!(
            output,
            "A {} symptom week (score {}, average weight {:.1}).",
            level, analysis.total_score, analysis.average_weight
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Ways to Help");

    for suggestion in &insights.suggestions {
        let _ = writeln!(output, "- [{}] {}", suggestion.icon, suggestion.text);
    }

    output
}
