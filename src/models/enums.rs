//! Shared domain enums (status slugs stored as TEXT in the database)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Stored status of an inventory equipment item.
///
/// `InUse` is maintained by the loans repository in lockstep with open loan
/// rows; `Damaged` is an out-of-band override that suppresses loanability
/// until manually cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Available,
    InUse,
    Damaged,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "available",
            EquipmentStatus::InUse => "in_use",
            EquipmentStatus::Damaged => "damaged",
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(EquipmentStatus::Available),
            "in_use" => Ok(EquipmentStatus::InUse),
            "damaged" => Ok(EquipmentStatus::Damaged),
            _ => Err(format!("Invalid equipment status: {}", s)),
        }
    }
}

impl From<String> for EquipmentStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(EquipmentStatus::Available)
    }
}

// ---------------------------------------------------------------------------
// UnitStatus
// ---------------------------------------------------------------------------

/// Maintenance flag of a room-fixed equipment unit, unrelated to loan state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum UnitStatus {
    Active,
    Inactive,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Active => "active",
            UnitStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UnitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UnitStatus::Active),
            "inactive" => Ok(UnitStatus::Inactive),
            _ => Err(format!("Invalid unit status: {}", s)),
        }
    }
}

impl From<String> for UnitStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(UnitStatus::Active)
    }
}

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// Derived status of a room. Never stored: computed from open loan existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LoanKind
// ---------------------------------------------------------------------------

/// Selector for the four loan tables. Loan ids are per-table, so every loan
/// operation is addressed as (kind, id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoanKind {
    RoomStudent,
    RoomProfessor,
    EquipmentStudent,
    EquipmentProfessor,
}

impl LoanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanKind::RoomStudent => "room_student",
            LoanKind::RoomProfessor => "room_professor",
            LoanKind::EquipmentStudent => "equipment_student",
            LoanKind::EquipmentProfessor => "equipment_professor",
        }
    }

    /// Database table backing this loan kind
    pub fn table(&self) -> &'static str {
        match self {
            LoanKind::RoomStudent => "room_student_loans",
            LoanKind::RoomProfessor => "room_professor_loans",
            LoanKind::EquipmentStudent => "equipment_student_loans",
            LoanKind::EquipmentProfessor => "equipment_professor_loans",
        }
    }

    pub fn is_equipment(&self) -> bool {
        matches!(self, LoanKind::EquipmentStudent | LoanKind::EquipmentProfessor)
    }

    pub fn is_room(&self) -> bool {
        !self.is_equipment()
    }
}

impl std::fmt::Display for LoanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LoanKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room_student" => Ok(LoanKind::RoomStudent),
            "room_professor" => Ok(LoanKind::RoomProfessor),
            "equipment_student" => Ok(LoanKind::EquipmentStudent),
            "equipment_professor" => Ok(LoanKind::EquipmentProfessor),
            _ => Err(format!("Invalid loan kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_status_round_trips_through_slug() {
        for status in [
            EquipmentStatus::Available,
            EquipmentStatus::InUse,
            EquipmentStatus::Damaged,
        ] {
            assert_eq!(status.as_str().parse::<EquipmentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn loan_kind_maps_to_its_table() {
        assert_eq!(LoanKind::RoomStudent.table(), "room_student_loans");
        assert_eq!(LoanKind::EquipmentProfessor.table(), "equipment_professor_loans");
        assert!(LoanKind::EquipmentStudent.is_equipment());
        assert!(LoanKind::RoomProfessor.is_room());
    }
}
