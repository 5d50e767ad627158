//! Professor model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Professor record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Professor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create professor request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProfessor {
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    pub department: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Update professor request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfessor {
    #[validate(length(min = 1, max = 64))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub last_name: Option<String>,
    pub department: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
}
