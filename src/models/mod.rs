//! Data models for LabLoan

pub mod campus;
pub mod enums;
pub mod equipment;
pub mod loan;
pub mod professor;
pub mod project;
pub mod room;
pub mod staff;
pub mod student;

// Re-export commonly used types
pub use campus::Campus;
pub use enums::{EquipmentStatus, LoanKind, RoomStatus, UnitStatus};
pub use equipment::{Equipment, RoomUnit};
pub use loan::{Borrower, EquipmentLoan, LoanRef, RoomLoan};
pub use professor::Professor;
pub use project::Project;
pub use room::Room;
pub use staff::Staff;
pub use student::Student;
