pub mod absence;
pub mod employee;
pub mod working_day;

pub use absence::{AbsenceRecord, BusinessTripEntry, VacationEntry, VacationStatus};
pub use employee::{Employee, Role};
pub use working_day::WorkingDayRecord;
