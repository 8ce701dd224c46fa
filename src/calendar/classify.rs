use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::events::{CalendarEvent, events_for_date};
use crate::calendar::holidays::HolidayCalendar;
use crate::model::absence::AbsenceRecord;
use crate::model::working_day::WorkingDayRecord;

/// How many events a day cell shows inline; the rest are counted and left to
/// an on-demand detail view.
pub const EVENT_PREVIEW_LIMIT: usize = 2;

/// The single background category of a calendar cell. Ordering here is the
/// precedence: the first matching condition wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DayCategory {
    Holiday,
    Sunday,
    Saturday,
    SickDay,
    WorkFromHomeDay,
    VacationDay,
    Ordinary,
}

impl DayCategory {
    /// Cell class for the rendering layer; ordinary days get none.
    pub fn css_class(self) -> &'static str {
        match self {
            DayCategory::Holiday => "holiday",
            DayCategory::Sunday => "sunday",
            DayCategory::Saturday => "saturday",
            DayCategory::SickDay => "sick-day",
            DayCategory::WorkFromHomeDay => "work-from-home",
            DayCategory::VacationDay => "vacation-day",
            DayCategory::Ordinary => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayClassification {
    pub date: NaiveDate,
    pub category: DayCategory,
    /// At most [`EVENT_PREVIEW_LIMIT`] events, in aggregation order.
    pub events: Vec<CalendarEvent>,
    pub overflow_count: usize,
}

/// Classify one date against the fetched snapshots.
///
/// Precedence is fixed and total: holiday, Sunday, Saturday, sick day,
/// work-from-home day, vacation day, ordinary. Events are aggregated
/// independently of the winning category, so a weekend cell under a business
/// trip still carries the trip in its event list.
pub fn classify(
    date: NaiveDate,
    holidays: &HolidayCalendar,
    records: &[AbsenceRecord],
    working_days: &[WorkingDayRecord],
) -> DayClassification {
    let mut events = events_for_date(records, date);
    let overflow_count = events.len().saturating_sub(EVENT_PREVIEW_LIMIT);
    let working_day = working_days.iter().find(|day| day.date == date);

    let category = if holidays.is_holiday(date) {
        DayCategory::Holiday
    } else if date.weekday() == Weekday::Sun {
        DayCategory::Sunday
    } else if date.weekday() == Weekday::Sat {
        DayCategory::Saturday
    } else if working_day.is_some_and(|day| day.is_absent) {
        DayCategory::SickDay
    } else if working_day.is_some_and(|day| day.work_from_home) {
        DayCategory::WorkFromHomeDay
    } else if !events.is_empty() {
        DayCategory::VacationDay
    } else {
        DayCategory::Ordinary
    };

    events.truncate(EVENT_PREVIEW_LIMIT);

    DayClassification {
        date,
        category,
        events,
        overflow_count,
    }
}
