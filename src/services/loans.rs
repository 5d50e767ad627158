//! Loan listing and lookup service

use crate::{
    error::AppResult,
    models::{
        enums::LoanKind,
        loan::{BorrowerLoans, EquipmentLoanDetails, LoanRecord, RoomLoanDetails},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a single loan row by (kind, id)
    pub async fn get(&self, kind: LoanKind, loan_id: i64) -> AppResult<LoanRecord> {
        if kind.is_room() {
            Ok(LoanRecord::Room(
                self.repository.loans.get_room_loan(kind, loan_id).await?,
            ))
        } else {
            Ok(LoanRecord::Equipment(
                self.repository
                    .loans
                    .get_equipment_loan(kind, loan_id)
                    .await?,
            ))
        }
    }

    /// List room loans of one kind
    pub async fn list_room_loans(
        &self,
        kind: LoanKind,
        open_only: bool,
    ) -> AppResult<Vec<RoomLoanDetails>> {
        self.repository
            .loans
            .list_room_loans(kind, open_only, None, None)
            .await
    }

    /// List equipment loans of one kind
    pub async fn list_equipment_loans(
        &self,
        kind: LoanKind,
        open_only: bool,
    ) -> AppResult<Vec<EquipmentLoanDetails>> {
        self.repository
            .loans
            .list_equipment_loans(kind, open_only, None, None)
            .await
    }

    /// Full loan history of a room (both borrower kinds, newest first)
    pub async fn loans_for_room(&self, code: &str) -> AppResult<Vec<RoomLoanDetails>> {
        let room = self.repository.rooms.get_by_code(code).await?;
        let mut loans = self
            .repository
            .loans
            .list_room_loans(LoanKind::RoomStudent, false, Some(room.id), None)
            .await?;
        loans.extend(
            self.repository
                .loans
                .list_room_loans(LoanKind::RoomProfessor, false, Some(room.id), None)
                .await?,
        );
        loans.sort_by(|a, b| b.loan.entry_time.cmp(&a.loan.entry_time));
        Ok(loans)
    }

    /// Full loan history of an equipment item (both borrower kinds)
    pub async fn loans_for_equipment(&self, code: &str) -> AppResult<Vec<EquipmentLoanDetails>> {
        let equipment = self.repository.equipment.get_by_code(code).await?;
        let mut loans = self
            .repository
            .loans
            .list_equipment_loans(LoanKind::EquipmentStudent, false, Some(equipment.id), None)
            .await?;
        loans.extend(
            self.repository
                .loans
                .list_equipment_loans(
                    LoanKind::EquipmentProfessor,
                    false,
                    Some(equipment.id),
                    None,
                )
                .await?,
        );
        loans.sort_by(|a, b| b.loan.delivery_time.cmp(&a.loan.delivery_time));
        Ok(loans)
    }

    /// Loans held by a student (room and equipment)
    pub async fn loans_for_student(&self, code: &str, open_only: bool) -> AppResult<BorrowerLoans> {
        let student = self.repository.students.get_by_code(code).await?;
        Ok(BorrowerLoans {
            room_loans: self
                .repository
                .loans
                .list_room_loans(LoanKind::RoomStudent, open_only, None, Some(student.id))
                .await?,
            equipment_loans: self
                .repository
                .loans
                .list_equipment_loans(LoanKind::EquipmentStudent, open_only, None, Some(student.id))
                .await?,
        })
    }

    /// Loans held by a professor (room and equipment)
    pub async fn loans_for_professor(
        &self,
        professor_id: i64,
        open_only: bool,
    ) -> AppResult<BorrowerLoans> {
        let professor = self.repository.professors.get_by_id(professor_id).await?;
        Ok(BorrowerLoans {
            room_loans: self
                .repository
                .loans
                .list_room_loans(LoanKind::RoomProfessor, open_only, None, Some(professor.id))
                .await?,
            equipment_loans: self
                .repository
                .loans
                .list_equipment_loans(
                    LoanKind::EquipmentProfessor,
                    open_only,
                    None,
                    Some(professor.id),
                )
                .await?,
        })
    }
}
