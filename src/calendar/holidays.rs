use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::calendar_day;

/// The list the client shipped with before the calendar became configurable:
/// Slovenian public holidays for 2024.
const BUILTIN_HOLIDAYS: [(i32, u32, u32); 12] = [
    (2024, 1, 1),
    (2024, 2, 8),
    (2024, 4, 21),
    (2024, 4, 22),
    (2024, 5, 1),
    (2024, 5, 2),
    (2024, 6, 25),
    (2024, 8, 15),
    (2024, 10, 31),
    (2024, 11, 1),
    (2024, 12, 25),
    (2024, 12, 26),
];

static BUILTIN: Lazy<HolidayCalendar> = Lazy::new(|| {
    let mut calendar = HolidayCalendar::default();
    for (y, m, d) in BUILTIN_HOLIDAYS {
        calendar.insert(NaiveDate::from_ymd_opt(y, m, d).expect("valid builtin holiday date"));
    }
    calendar
});

#[derive(Debug, Error)]
pub enum HolidayCalendarError {
    #[error("failed to read holiday calendar file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse holiday calendar: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Public holidays keyed by year. A date whose year has no entries is never a
/// holiday; the calendar makes no attempt to derive holidays for years it was
/// not given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    years: BTreeMap<i32, BTreeSet<NaiveDate>>,
}

impl HolidayCalendar {
    /// The compiled-in default, used when no calendar file is configured.
    pub fn builtin() -> &'static HolidayCalendar {
        &BUILTIN
    }

    /// Load the `{ "<year>": ["YYYY-MM-DD", ...] }` mapping from a file.
    pub fn from_json_file(path: &Path) -> Result<Self, HolidayCalendarError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, HolidayCalendarError> {
        let calendar: HolidayCalendar = serde_json::from_str(json)?;
        for (year, days) in &calendar.years {
            for day in days {
                if day.year() != *year {
                    // Kept, but unreachable through is_holiday, which
                    // indexes by the date's own year.
                    warn!(year = *year, date = %calendar_day(*day), "holiday filed under the wrong year");
                }
            }
        }
        Ok(calendar)
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.years.entry(date.year()).or_default().insert(date);
    }

    /// Exact set membership, no date math.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.years
            .get(&date.year())
            .is_some_and(|days| days.contains(&date))
    }

    pub fn is_empty(&self) -> bool {
        self.years.values().all(BTreeSet::is_empty)
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_builtin_date_is_a_holiday() {
        let calendar = HolidayCalendar::builtin();
        for (y, m, d) in BUILTIN_HOLIDAYS {
            assert!(calendar.is_holiday(date(y, m, d)), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn ordinary_days_are_not_holidays() {
        let calendar = HolidayCalendar::builtin();
        assert!(!calendar.is_holiday(date(2024, 3, 4)));
        assert!(!calendar.is_holiday(date(2024, 12, 24)));
    }

    #[test]
    fn years_without_entries_have_no_holidays() {
        // Christmas 2023 is a real holiday, but the builtin list only knows 2024
        assert!(!HolidayCalendar::builtin().is_holiday(date(2023, 12, 25)));
    }

    #[test]
    fn loads_year_map_from_json() {
        let calendar = HolidayCalendar::from_json_str(
            r#"{
                "2024": ["2024-01-01", "2024-12-25"],
                "2025": ["2025-01-01"]
            }"#,
        )
        .unwrap();
        assert!(calendar.is_holiday(date(2024, 12, 25)));
        assert!(calendar.is_holiday(date(2025, 1, 1)));
        assert!(!calendar.is_holiday(date(2025, 12, 25)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            HolidayCalendar::from_json_str(r#"{"2024": ["not a date"]}"#),
            Err(HolidayCalendarError::Parse(_))
        ));
    }

    #[test]
    fn date_under_wrong_year_key_is_kept_but_unreachable() {
        let calendar =
            HolidayCalendar::from_json_str(r#"{"2024": ["2025-01-01"]}"#).unwrap();
        assert!(!calendar.is_empty());
        assert!(!calendar.is_holiday(date(2025, 1, 1)));
    }

    #[test]
    fn weekend_is_saturday_or_sunday() {
        assert!(is_weekend(date(2024, 3, 2)));
        assert!(is_weekend(date(2024, 3, 3)));
        assert!(!is_weekend(date(2024, 3, 1)));
        assert!(!is_weekend(date(2024, 3, 4)));
    }
}
