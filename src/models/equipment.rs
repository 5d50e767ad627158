//! Equipment models: loanable inventory items and room-fixed units
//!
//! The two catalogs are disjoint. Inventory items carry the stored
//! availability status the loans repository keeps in sync; room-fixed units
//! carry only a maintenance flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{EquipmentStatus, UnitStatus};

/// Inventory equipment item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i64,
    /// Inventory code, unique
    pub code: String,
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub status: EquipmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub notes: Option<String>,
}

/// Update equipment request (descriptive fields only; status has its own path)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub notes: Option<String>,
}

/// Out-of-band status write request (mark damaged / clear damaged)
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetEquipmentStatus {
    pub status: EquipmentStatus,
}

/// Room-fixed equipment unit
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoomUnit {
    pub id: i64,
    pub code: String,
    pub room_id: i64,
    pub description: String,
    pub status: UnitStatus,
    pub notes: Option<String>,
}

/// Create room unit request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomUnit {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    pub room_id: i64,
    #[validate(length(min = 1, max = 256))]
    pub description: String,
    pub notes: Option<String>,
}

/// Update room unit request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomUnit {
    #[validate(length(min = 1, max = 256))]
    pub description: Option<String>,
    pub status: Option<UnitStatus>,
    pub notes: Option<String>,
}
