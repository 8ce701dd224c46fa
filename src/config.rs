use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use tracing::info;

use crate::calendar::holidays::{HolidayCalendar, HolidayCalendarError};

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the `{ "<year>": ["YYYY-MM-DD", ...] }` holiday file; the
    /// compiled-in list is used when unset.
    pub holiday_calendar_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            holiday_calendar_file: env::var("HOLIDAY_CALENDAR_FILE").ok().map(PathBuf::from),
        }
    }

    pub fn holiday_calendar(&self) -> Result<HolidayCalendar, HolidayCalendarError> {
        match &self.holiday_calendar_file {
            Some(path) => {
                let calendar = HolidayCalendar::from_json_file(path)?;
                info!(path = %path.display(), "loaded holiday calendar");
                Ok(calendar)
            }
            None => Ok(HolidayCalendar::builtin().clone()),
        }
    }
}
