use chrono::NaiveDate;
use serde::Serialize;

use crate::model::absence::{AbsenceRecord, VacationStatus};

/// One absence occurrence projected onto a single calendar date. Recomputed
/// per render pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub detail: EventDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventDetail {
    #[serde(rename_all = "camelCase")]
    Vacation {
        employee_name: String,
        reason: String,
        absence_record_id: String,
        vacation_id: String,
    },
    #[serde(rename_all = "camelCase")]
    BusinessTrip {
        employee_name: String,
        destination: String,
    },
}

impl EventDetail {
    pub fn employee_name(&self) -> &str {
        match self {
            EventDetail::Vacation { employee_name, .. }
            | EventDetail::BusinessTrip { employee_name, .. } => employee_name,
        }
    }
}

/// All events applicable to `date`: approved vacations first, in record
/// iteration order, then business trips. Pending and rejected vacations are
/// never visible on the shared calendar.
pub fn events_for_date(records: &[AbsenceRecord], date: NaiveDate) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for record in records {
        for vacation in &record.vacations {
            if vacation.status == VacationStatus::Approved && vacation.covers(date) {
                events.push(CalendarEvent {
                    date,
                    detail: EventDetail::Vacation {
                        employee_name: record.display_name(),
                        reason: vacation.reason.clone(),
                        absence_record_id: record.id.clone(),
                        vacation_id: vacation.id.clone(),
                    },
                });
            }
        }
    }

    for record in records {
        for trip in &record.business_trips {
            if trip.covers(date) {
                events.push(CalendarEvent {
                    date,
                    detail: EventDetail::BusinessTrip {
                        employee_name: record.display_name(),
                        destination: trip.destination.clone(),
                    },
                });
            }
        }
    }

    events
}
