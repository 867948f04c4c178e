use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::CheckIn;

/// Inclusive date range of one seven-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The week ending on `today` and the week before it.
pub fn week_bounds(today: NaiveDate) -> (WeekWindow, WeekWindow) {
    let current = WeekWindow {
        start: today - Duration::days(6),
        end: today,
    };
    let previous = WeekWindow {
        start: today - Duration::days(13),
        end: today - Duration::days(7),
    };
    (current, previous)
}

/// Partitions check-ins into (current, previous); anything older or in the
/// future is dropped.
pub fn split_weeks(checkins: &[CheckIn], today: NaiveDate) -> (Vec<CheckIn>, Vec<CheckIn>) {
    let (current_window, previous_window) = week_bounds(today);
    let mut current = Vec::new();
    let mut previous = Vec::new();

    for checkin in checkins {
        if current_window.contains(checkin.date) {
            current.push(checkin.clone());
        } else if previous_window.contains(checkin.date) {
            previous.push(checkin.clone());
        }
    }

    (current, previous)
}

/// Distinct calendar days with at least one check-in.
pub fn days_logged(checkins: &[CheckIn]) -> u32 {
    checkins
        .iter()
        .map(|checkin| checkin.date)
        .collect::<HashSet<_>>()
        .len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(date: NaiveDate) -> CheckIn {
        CheckIn {
            date,
            mood: None,
            energy: None,
            symptoms: String::new(),
            slot: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn bounds_cover_two_adjacent_weeks() {
        let (current, previous) = week_bounds(day(14));
        assert_eq!(current.start, day(8));
        assert_eq!(current.end, day(14));
        assert_eq!(previous.start, day(1));
        assert_eq!(previous.end, day(7));
    }

    #[test]
    fn split_drops_out_of_range_records() {
        let checkins = vec![on(day(14)), on(day(8)), on(day(7)), on(day(1)), on(day(15))];
        let (current, previous) = split_weeks(&checkins, day(14));
        assert_eq!(current.len(), 2);
        assert_eq!(previous.len(), 2);
    }

    #[test]
    fn days_logged_counts_distinct_dates() {
        let checkins = vec![on(day(3)), on(day(3)), on(day(4))];
        assert_eq!(days_logged(&checkins), 2);
        assert_eq!(days_logged(&[]), 0);
    }
}
