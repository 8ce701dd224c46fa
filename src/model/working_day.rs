use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of clocked time for one employee, from the time-clock source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingDayRecord {
    pub date: NaiveDate,
    pub hours_worked: u32,
    pub minutes_worked: u32,
    pub seconds_worked: u32,
    pub is_absent: bool,
    pub work_from_home: bool,
}

impl WorkingDayRecord {
    pub fn worked_duration(&self) -> Duration {
        Duration::seconds(
            i64::from(self.hours_worked) * 3600
                + i64::from(self.minutes_worked) * 60
                + i64::from(self.seconds_worked),
        )
    }

    /// `H:MM:SS` label for the working-hours calendar cell.
    pub fn worked_label(&self) -> String {
        format!(
            "{}:{:02}:{:02}",
            self.hours_worked, self.minutes_worked, self.seconds_worked
        )
    }
}
