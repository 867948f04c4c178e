use std::path::Path;

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{CheckIn, Energy, Mood, TimeSlot};

/// A check-in as it arrives from a file, labels still unparsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRow {
    pub date: NaiveDate,
    pub mood: Option<String>,
    pub energy: Option<String>,
    #[serde(default)]
    pub symptoms: Option<String>,
    pub slot: Option<String>,
}

impl CheckInRow {
    /// Unrecognized labels are dropped with a warning, never rejected.
    pub fn into_checkin(self) -> CheckIn {
        CheckIn {
            date: self.date,
            mood: parse_label(self.mood.as_deref(), "mood", self.date, Mood::from_label),
            energy: parse_label(self.energy.as_deref(), "energy", self.date, Energy::from_label),
            symptoms: self.symptoms.unwrap_or_default(),
            slot: parse_label(self.slot.as_deref(), "slot", self.date, TimeSlot::from_label),
        }
    }
}

fn parse_label<T>(
    raw: Option<&str>,
    field: &str,
    date: NaiveDate,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::warn!(field, value = raw, %date, "ignoring unrecognized label");
    }
    parsed
}

/// Reads check-ins from a `.json` array or a CSV file with a
/// `date,mood,energy,symptoms,slot` header.
pub fn load_checkins(path: &Path) -> anyhow::Result<Vec<CheckIn>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let rows = if is_json {
        read_json(path)?
    } else {
        read_csv(path)?
    };

    tracing::info!(rows = rows.len(), path = %path.display(), "loaded check-ins");
    Ok(rows.into_iter().map(CheckInRow::into_checkin).collect())
}

fn read_json(path: &Path) -> anyhow::Result<Vec<CheckInRow>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid check-in JSON in {}", path.display()))
}

fn read_csv(path: &Path) -> anyhow::Result<Vec<CheckInRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut rows = Vec::new();

    for (idx, result) in reader.deserialize::<CheckInRow>().enumerate() {
        // Header is line 1.
        let row = result.with_context(|| format!("invalid check-in on line {}", idx + 2))?;
        rows.push(row);
    }

    Ok(rows)
}

/// Two weeks of realistic check-ins ending on `today`.
pub fn sample_rows(today: NaiveDate) -> Vec<CheckInRow> {
    let entries: [(i64, &str, &str, &str, &str); 14] = [
        (13, "happy", "high", "", "morning"),
        (12, "happy", "medium", "heartburn", "evening"),
        (10, "neutral", "medium", "nausea", "morning"),
        (9, "happy", "high", "", "evening"),
        (8, "neutral", "medium", "heartburn, back pain", "night"),
        (7, "happy", "medium", "", "morning"),
        (6, "neutral", "low", "nausea, fatigue", "morning"),
        (5, "sad", "low", "back pain, fatigue", "evening"),
        (4, "sad", "low", "insomnia", "night"),
        (3, "neutral", "medium", "back pain", "morning"),
        (2, "sad", "low", "headache, fatigue", "evening"),
        (1, "happy", "medium", "back pain", "morning"),
        (0, "sad", "low", "fatigue, swelling", "evening"),
        (0, "grumpy", "", "", "afternoon"),
    ];

    entries
        .iter()
        .map(|(days_ago, mood, energy, symptoms, slot)| CheckInRow {
            date: today - Duration::days(*days_ago),
            mood: Some(mood.to_string()),
            energy: Some(energy.to_string()),
            symptoms: Some(symptoms.to_string()),
            slot: Some(slot.to_string()),
        })
        .collect()
}

pub fn write_sample_csv(path: &Path, today: NaiveDate) -> anyhow::Result<usize> {
    let rows = sample_rows(today);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_labels_become_none() {
        let row = CheckInRow {
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            mood: Some("Grumpy".to_string()),
            energy: Some(" LOW ".to_string()),
            symptoms: None,
            slot: Some("".to_string()),
        };
        let checkin = row.into_checkin();
        assert_eq!(checkin.mood, None);
        assert_eq!(checkin.energy, Some(Energy::Low));
        assert_eq!(checkin.slot, None);
        assert_eq!(checkin.symptoms, "");
    }

    #[test]
    fn sample_spans_two_weeks() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let rows = sample_rows(today);
        assert_eq!(rows.len(), 14);
        assert!(rows
            .iter()
            .all(|row| row.date <= today && row.date >= today - Duration::days(13)));
    }
}
