//! Room model
//!
//! A room has no stored status: occupancy is derived at query time from the
//! existence of open room loans.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::RoomStatus;

/// Room record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i64,
    /// Internal code, unique, user-assigned
    pub code: String,
    /// Display name
    pub name: String,
    pub campus_id: Option<i64>,
    pub notes: Option<String>,
}

/// Room with its derived occupancy status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomWithStatus {
    #[serde(flatten)]
    pub room: Room,
    pub status: RoomStatus,
}

/// Create room request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoom {
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub campus_id: Option<i64>,
    pub notes: Option<String>,
}

/// Update room request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoom {
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    pub campus_id: Option<i64>,
    pub notes: Option<String>,
}
