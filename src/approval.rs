use thiserror::Error;
use tracing::info;

use crate::model::absence::{AbsenceRecord, VacationEntry, VacationStatus};
use crate::model::employee::Employee;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApprovalError {
    #[error("only admins and moderators may process vacation requests")]
    Forbidden,
    #[error("vacation request not found")]
    NotFound,
    #[error("vacation request already processed: {status}")]
    AlreadyProcessed { status: VacationStatus },
}

/// One entry of the approval queue.
#[derive(Debug, Clone)]
pub struct PendingVacation<'a> {
    pub absence_record_id: &'a str,
    pub employee_name: String,
    pub vacation: &'a VacationEntry,
}

/// Every vacation still waiting for approval, in record iteration order.
pub fn pending_vacations(records: &[AbsenceRecord]) -> Vec<PendingVacation<'_>> {
    records
        .iter()
        .flat_map(|record| {
            record
                .vacations
                .iter()
                .filter(|vacation| vacation.is_pending())
                .map(|vacation| PendingVacation {
                    absence_record_id: &record.id,
                    employee_name: record.display_name(),
                    vacation,
                })
        })
        .collect()
}

/// Mark a pending vacation approved in the local snapshot, after the backend
/// confirmed the transition.
pub fn approve_vacation(
    records: &mut [AbsenceRecord],
    approver: &Employee,
    absence_record_id: &str,
    vacation_id: &str,
) -> Result<(), ApprovalError> {
    transition(records, approver, absence_record_id, vacation_id, VacationStatus::Approved)
}

/// Mark a pending vacation rejected in the local snapshot.
pub fn reject_vacation(
    records: &mut [AbsenceRecord],
    approver: &Employee,
    absence_record_id: &str,
    vacation_id: &str,
) -> Result<(), ApprovalError> {
    transition(records, approver, absence_record_id, vacation_id, VacationStatus::Rejected)
}

fn transition(
    records: &mut [AbsenceRecord],
    approver: &Employee,
    absence_record_id: &str,
    vacation_id: &str,
    to: VacationStatus,
) -> Result<(), ApprovalError> {
    if !approver.can_approve_vacations() {
        return Err(ApprovalError::Forbidden);
    }

    let vacation = records
        .iter_mut()
        .filter(|record| record.id == absence_record_id)
        .flat_map(|record| record.vacations.iter_mut())
        .find(|vacation| vacation.id == vacation_id)
        .ok_or(ApprovalError::NotFound)?;

    // Transitions happen exactly once; the status is terminal afterwards.
    if !vacation.is_pending() {
        return Err(ApprovalError::AlreadyProcessed {
            status: vacation.status,
        });
    }

    vacation.status = to;
    info!(absence_record_id, vacation_id, status = %to, "vacation request processed");
    Ok(())
}
