use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::weekdays_in_range;
use crate::model::absence::VacationStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("start_date cannot be after end_date")]
    StartAfterEnd,
    #[error("not enough vacation days left: requested {requested}, remaining {remaining}")]
    InsufficientBalance { requested: u32, remaining: u32 },
}

/// A new vacation request as entered in the form, validated locally before
/// anything is sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl VacationRequest {
    /// How many vacation days the request consumes: calendar days in range,
    /// Saturdays and Sundays excluded.
    pub fn requested_days(&self) -> u32 {
        weekdays_in_range(self.start_date, self.end_date).count() as u32
    }

    /// Local gate before the network call. Returns the number of days the
    /// request will consume.
    pub fn validate(&self, remaining_days: u32) -> Result<u32, RequestError> {
        if self.start_date > self.end_date {
            return Err(RequestError::StartAfterEnd);
        }
        let requested = self.requested_days();
        if requested > remaining_days {
            return Err(RequestError::InsufficientBalance {
                requested,
                remaining: remaining_days,
            });
        }
        Ok(requested)
    }

    /// The POST body for a validated request. Every submission starts life
    /// waiting for approval; the backend assigns the entry id.
    pub fn into_submission(self, employee_id: &str) -> VacationSubmission {
        VacationSubmission {
            employee_id: employee_id.to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
            status: VacationStatus::WaitingForApproval,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationSubmission {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: VacationStatus,
}
