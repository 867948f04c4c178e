use std::collections::HashMap;

use crate::aggregate::normalize_symptom;
use crate::models::{
    Direction, EnergyDelta, MoodDelta, SlotDelta, SymptomChanges, SymptomCount, SymptomShift,
    TrendDeltas, WeekAggregate, WeekTrends,
};

fn delta(current: u32, previous: u32) -> i64 {
    current as i64 - previous as i64
}

/// Signed per-category change from `previous` to `current`.
pub fn compare_weeks(current: &WeekAggregate, previous: &WeekAggregate) -> TrendDeltas {
    let (cm, pm) = (&current.mood_counts, &previous.mood_counts);
    let (ce, pe) = (&current.energy_counts, &previous.energy_counts);
    let (cs, ps) = (&current.slot_counts, &previous.slot_counts);

    TrendDeltas {
        total_checkins: delta(current.total_checkins, previous.total_checkins),
        mood: MoodDelta {
            happy: delta(cm.happy, pm.happy),
            neutral: delta(cm.neutral, pm.neutral),
            sad: delta(cm.sad, pm.sad),
        },
        energy: EnergyDelta {
            high: delta(ce.high, pe.high),
            medium: delta(ce.medium, pe.medium),
            low: delta(ce.low, pe.low),
        },
        slots: SlotDelta {
            morning: delta(cs.morning, ps.morning),
            evening: delta(cs.evening, ps.evening),
            night: delta(cs.night, ps.night),
        },
        symptoms: symptom_changes(&current.top_symptoms, &previous.top_symptoms),
    }
}

fn symptom_changes(current: &[SymptomCount], previous: &[SymptomCount]) -> SymptomChanges {
    let previous_by_name: HashMap<String, &SymptomCount> = previous
        .iter()
        .map(|entry| (normalize_symptom(&entry.symptom), entry))
        .collect();
    let current_names: Vec<String> = current
        .iter()
        .map(|entry| normalize_symptom(&entry.symptom))
        .collect();

    let mut changes = SymptomChanges::default();

    for (entry, name) in current.iter().zip(&current_names) {
        match previous_by_name.get(name) {
            None => changes.new.push(entry.clone()),
            Some(before) if entry.count > before.count => changes.increased.push(SymptomShift {
                symptom: entry.symptom.clone(),
                previous: before.count,
                current: entry.count,
            }),
            Some(before) if entry.count < before.count => changes.decreased.push(SymptomShift {
                symptom: entry.symptom.clone(),
                previous: before.count,
                current: entry.count,
            }),
            Some(_) => {}
        }
    }

    changes.gone = previous
        .iter()
        .filter(|entry| !current_names.contains(&normalize_symptom(&entry.symptom)))
        .cloned()
        .collect();

    changes
}

/// Three-way direction per category plus an unweighted composite.
///
/// Neutral mood and medium energy carry no signal and are left out.
pub fn classify(deltas: &TrendDeltas) -> WeekTrends {
    let mood_score = deltas.mood.happy - deltas.mood.sad;
    let energy_score = deltas.energy.high - deltas.energy.low;
    let changes = &deltas.symptoms;
    let symptom_score = (changes.decreased.len() + changes.gone.len()) as i64
        - (changes.increased.len() + changes.new.len()) as i64;
    let overall_score = mood_score + energy_score + symptom_score;

    WeekTrends {
        mood: Direction::from_score(mood_score),
        energy: Direction::from_score(energy_score),
        symptoms: Direction::from_score(symptom_score),
        overall_wellbeing: Direction::from_score(overall_score),
        mood_score,
        energy_score,
        symptom_score,
        overall_score,
    }
}

/// Sad up and happy down together.
pub fn mood_worsened(deltas: &TrendDeltas) -> bool {
    deltas.mood.sad > 0 && deltas.mood.happy < 0
}

/// Low up and high down together.
pub fn energy_worsened(deltas: &TrendDeltas) -> bool {
    deltas.energy.low > 0 && deltas.energy.high < 0
}
