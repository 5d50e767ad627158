//! Loan models and related request types
//!
//! Four loan tables back these types (room/equipment × student/professor).
//! A loan is open while its close timestamp is null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::LoanKind;

/// Borrower reference: student code or professor id, mutually exclusive
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Borrower {
    Student { code: String },
    Professor { id: i64 },
}

/// Room loan row (either borrower table; the absent reference is None)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoomLoan {
    pub id: i64,
    pub room_id: i64,
    #[sqlx(default)]
    pub student_id: Option<i64>,
    #[sqlx(default)]
    pub professor_id: Option<i64>,
    pub supervisor_id: i64,
    pub assistant_id: Option<i64>,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub closed_by: Option<i64>,
    pub remarks: Option<String>,
    pub signature_doc: Option<String>,
}

/// Equipment loan row (either borrower table; the absent reference is None)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentLoan {
    pub id: i64,
    pub equipment_id: i64,
    #[sqlx(default)]
    pub student_id: Option<i64>,
    #[sqlx(default)]
    pub professor_id: Option<i64>,
    pub supervisor_id: i64,
    pub assistant_id: Option<i64>,
    pub delivery_time: DateTime<Utc>,
    pub return_time: Option<DateTime<Utc>>,
    pub closed_by: Option<i64>,
    pub remarks: Option<String>,
    pub signature_doc: Option<String>,
}

/// Loan reference returned by checkout and accepted by return/delete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct LoanRef {
    pub kind: LoanKind,
    pub id: i64,
}

/// Record a room checkout
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRoom {
    /// Room internal code
    pub room_code: String,
    pub borrower: Borrower,
    pub supervisor_id: i64,
    pub assistant_id: Option<i64>,
    /// Entry time; defaults to now
    pub timestamp: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
    pub signature_doc: Option<String>,
}

/// Record an equipment hand-out
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutEquipment {
    /// Equipment inventory code
    pub equipment_code: String,
    pub borrower: Borrower,
    pub supervisor_id: i64,
    pub assistant_id: Option<i64>,
    /// Delivery time; defaults to now
    pub timestamp: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
    pub signature_doc: Option<String>,
}

/// Record a return
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReturnLoan {
    /// Staff member closing the loan
    pub closed_by: i64,
    /// Close time; defaults to now
    pub timestamp: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
    pub signature_doc: Option<String>,
}

/// A loan row from either table family
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LoanRecord {
    Room(RoomLoan),
    Equipment(EquipmentLoan),
}

/// Room loan with resolved display fields
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoomLoanDetails {
    pub kind: LoanKind,
    #[serde(flatten)]
    pub loan: RoomLoan,
    pub room_code: String,
    pub room_name: String,
    pub borrower_name: String,
}

/// Equipment loan with resolved display fields
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentLoanDetails {
    pub kind: LoanKind,
    #[serde(flatten)]
    pub loan: EquipmentLoan,
    pub equipment_code: String,
    pub equipment_name: String,
    pub borrower_name: String,
}

/// All loans held by one borrower
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowerLoans {
    pub room_loans: Vec<RoomLoanDetails>,
    pub equipment_loans: Vec<EquipmentLoanDetails>,
}
