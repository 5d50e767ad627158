//! Resource availability tracker
//!
//! Owns the availability lifecycle of loanable resources: checkout, return,
//! deletion compensation, and the out-of-band equipment status override.
//! Reference resolution (codes, borrowers, staff) happens here; the actual
//! state transitions are delegated to the loans repository, which runs them
//! transactionally.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, LoanKind},
        equipment::Equipment,
        loan::{Borrower, CheckoutEquipment, CheckoutRoom, LoanRef, ReturnLoan},
    },
    repository::{loans::CheckoutRecord, Repository},
};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
}

impl AvailabilityService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Derived room availability: no open loan in either room loan table
    pub async fn is_room_available(&self, code: &str) -> AppResult<bool> {
        let room = self.repository.rooms.get_by_code(code).await?;
        self.repository.rooms.is_available(room.id).await
    }

    /// Stored equipment availability: `in_use` and `damaged` both exclude
    /// the item
    pub async fn is_equipment_available(&self, code: &str) -> AppResult<bool> {
        let equipment = self.repository.equipment.get_by_code(code).await?;
        Ok(equipment.status == EquipmentStatus::Available)
    }

    /// Record a room checkout
    pub async fn checkout_room(&self, request: &CheckoutRoom) -> AppResult<LoanRef> {
        let room = self.repository.rooms.get_by_code(&request.room_code).await?;
        let (kind, borrower_id) = self.resolve_borrower(&request.borrower, true).await?;
        self.check_staff(request.supervisor_id, request.assistant_id)
            .await?;

        let record = CheckoutRecord {
            resource_id: room.id,
            borrower_id,
            supervisor_id: request.supervisor_id,
            assistant_id: request.assistant_id,
            timestamp: request.timestamp.unwrap_or_else(Utc::now),
            remarks: request.remarks.clone(),
            signature_doc: request.signature_doc.clone(),
        };
        self.repository
            .loans
            .checkout_room(kind, &room.code, &record)
            .await
    }

    /// Record an equipment hand-out
    pub async fn checkout_equipment(&self, request: &CheckoutEquipment) -> AppResult<LoanRef> {
        let equipment = self
            .repository
            .equipment
            .get_by_code(&request.equipment_code)
            .await?;
        let (kind, borrower_id) = self.resolve_borrower(&request.borrower, false).await?;
        self.check_staff(request.supervisor_id, request.assistant_id)
            .await?;

        let record = CheckoutRecord {
            resource_id: equipment.id,
            borrower_id,
            supervisor_id: request.supervisor_id,
            assistant_id: request.assistant_id,
            timestamp: request.timestamp.unwrap_or_else(Utc::now),
            remarks: request.remarks.clone(),
            signature_doc: request.signature_doc.clone(),
        };
        self.repository
            .loans
            .checkout_equipment(kind, &equipment.code, &record)
            .await
    }

    /// Record a return
    pub async fn return_loan(
        &self,
        kind: LoanKind,
        loan_id: i64,
        data: &ReturnLoan,
    ) -> AppResult<()> {
        self.repository.staff.get_by_id(data.closed_by).await?;
        self.repository.loans.return_loan(kind, loan_id, data).await
    }

    /// Delete a loan, compensating equipment status when it was open
    pub async fn delete_loan(&self, kind: LoanKind, loan_id: i64) -> AppResult<()> {
        self.repository.loans.delete_loan(kind, loan_id).await
    }

    /// Out-of-band equipment status write (mark damaged / clear damaged).
    /// `in_use` is owned by the loan lifecycle and cannot be set here.
    pub async fn set_equipment_status(
        &self,
        code: &str,
        status: EquipmentStatus,
    ) -> AppResult<Equipment> {
        if status == EquipmentStatus::InUse {
            return Err(AppError::Validation(
                "Status in_use is managed by loan records".to_string(),
            ));
        }
        let equipment = self.repository.equipment.get_by_code(code).await?;
        self.repository
            .equipment
            .set_status(equipment.id, status)
            .await
    }

    async fn resolve_borrower(
        &self,
        borrower: &Borrower,
        room: bool,
    ) -> AppResult<(LoanKind, i64)> {
        match borrower {
            Borrower::Student { code } => {
                let student = self.repository.students.get_by_code(code).await?;
                let kind = if room {
                    LoanKind::RoomStudent
                } else {
                    LoanKind::EquipmentStudent
                };
                Ok((kind, student.id))
            }
            Borrower::Professor { id } => {
                let professor = self.repository.professors.get_by_id(*id).await?;
                let kind = if room {
                    LoanKind::RoomProfessor
                } else {
                    LoanKind::EquipmentProfessor
                };
                Ok((kind, professor.id))
            }
        }
    }

    async fn check_staff(&self, supervisor_id: i64, assistant_id: Option<i64>) -> AppResult<()> {
        self.repository.staff.get_by_id(supervisor_id).await?;
        if let Some(assistant_id) = assistant_id {
            self.repository.staff.get_by_id(assistant_id).await?;
        }
        Ok(())
    }
}
