pub mod classify;
pub mod events;
pub mod holidays;

pub use classify::{DayCategory, DayClassification, EVENT_PREVIEW_LIMIT, classify};
pub use events::{CalendarEvent, EventDetail, events_for_date};
pub use holidays::{HolidayCalendar, is_weekend};

use chrono::NaiveDate;

/// The `YYYY-MM-DD` normalization used for display and wire comparisons.
pub fn calendar_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Every calendar day in `[start, end]`, empty when `start > end`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Days in `[start, end]` that consume a vacation day, i.e. everything but
/// Saturdays and Sundays.
pub fn weekdays_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    days_in_range(start, end).filter(|day| !is_weekend(*day))
}
