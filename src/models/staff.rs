//! Laboratory staff model
//!
//! Staff members issue and close loans; loan rows reference a supervising
//! staff member and optionally an assistant.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Staff record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
    pub email: Option<String>,
    pub active: bool,
}

/// Create staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStaff {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub role: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// Update staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStaff {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    pub role: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub active: Option<bool>,
}
