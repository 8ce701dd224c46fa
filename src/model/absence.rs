use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::calendar::holidays::is_weekend;

/// Per-employee-per-year container of vacation and business-trip entries,
/// as returned by the absence endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceRecord {
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub vacations: Vec<VacationEntry>,
    #[serde(default)]
    pub business_trips: Vec<BusinessTripEntry>,
    pub year: i32,
}

impl AbsenceRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationEntry {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: VacationStatus,
}

impl VacationEntry {
    /// Whether this vacation occupies `date` on a calendar. The stored range
    /// includes weekends, but a vacation never occupies Saturday or Sunday;
    /// a reversed range (`start > end`) occupies nothing.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date && !is_weekend(date)
    }

    pub fn is_pending(&self) -> bool {
        self.status == VacationStatus::WaitingForApproval
    }
}

/// Lifecycle: every entry is created as `WaitingForApproval` and is moved to
/// `Approved` or `Rejected` exactly once by an admin or moderator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum VacationStatus {
    #[serde(rename = "waiting for approval")]
    #[strum(serialize = "waiting for approval")]
    WaitingForApproval,
    #[serde(rename = "approved")]
    #[strum(serialize = "approved")]
    Approved,
    #[serde(rename = "rejected")]
    #[strum(serialize = "rejected")]
    Rejected,
}

/// Business trips carry no approval status; they are active once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessTripEntry {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destination: String,
}

impl BusinessTripEntry {
    /// Inclusive range check; trips occupy weekend days as well.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn vacation(start: NaiveDate, end: NaiveDate, status: VacationStatus) -> VacationEntry {
        VacationEntry {
            id: "v1".to_string(),
            start_date: start,
            end_date: end,
            reason: "family trip".to_string(),
            status,
        }
    }

    #[test]
    fn vacation_skips_weekend_days_inside_its_range() {
        // 2024-03-01 is a Friday, 2024-03-04 the following Monday
        let entry = vacation(date(2024, 3, 1), date(2024, 3, 4), VacationStatus::Approved);
        assert!(entry.covers(date(2024, 3, 1)));
        assert!(!entry.covers(date(2024, 3, 2)));
        assert!(!entry.covers(date(2024, 3, 3)));
        assert!(entry.covers(date(2024, 3, 4)));
        assert!(!entry.covers(date(2024, 3, 5)));
    }

    #[test]
    fn reversed_vacation_range_covers_nothing() {
        let entry = vacation(date(2024, 3, 4), date(2024, 3, 1), VacationStatus::Approved);
        for day in [date(2024, 3, 1), date(2024, 3, 2), date(2024, 3, 4)] {
            assert!(!entry.covers(day));
        }
    }

    #[test]
    fn business_trip_covers_weekends() {
        let trip = BusinessTripEntry {
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 4),
            destination: "Berlin".to_string(),
        };
        for offset in 1..=4 {
            assert!(trip.covers(date(2024, 3, offset)));
        }
        assert!(!trip.covers(date(2024, 3, 5)));
    }

    #[test]
    fn status_round_trips_through_wire_strings() {
        assert_eq!(
            "waiting for approval".parse::<VacationStatus>().unwrap(),
            VacationStatus::WaitingForApproval
        );
        assert_eq!(VacationStatus::Approved.to_string(), "approved");
        assert_eq!(VacationStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn record_deserializes_backend_payload_without_trips() {
        let json = r#"{
            "id": "a1",
            "employeeId": "u1",
            "firstName": "Ana",
            "lastName": "Kovac",
            "vacations": [{
                "id": "v1",
                "startDate": "2024-03-01",
                "endDate": "2024-03-04",
                "reason": "family trip",
                "status": "waiting for approval"
            }],
            "year": 2024
        }"#;
        let record: AbsenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_name(), "Ana Kovac");
        assert!(record.business_trips.is_empty());
        assert!(record.vacations[0].is_pending());
    }
}
