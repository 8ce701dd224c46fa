//! Core engine of the Tracker time-tracking app: day classification and
//! absence aggregation for the shared working-hours calendars.
//!
//! The engine is synchronous and purely functional over already-fetched
//! snapshots. Callers fetch [`model::AbsenceRecord`] and
//! [`model::WorkingDayRecord`] collections from the backend, then invoke
//! [`classify`] once per visible date cell; nothing here performs I/O or
//! holds state between calls.

pub mod approval;
pub mod calendar;
pub mod config;
pub mod model;
pub mod requests;

pub use calendar::classify::{DayCategory, DayClassification, EVENT_PREVIEW_LIMIT, classify};
pub use calendar::events::{CalendarEvent, EventDetail, events_for_date};
pub use calendar::holidays::{HolidayCalendar, is_weekend};
pub use config::Config;
