//! Curriculum project model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub course: Option<String>,
    pub term: Option<String>,
    pub professor_id: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub course: Option<String>,
    pub term: Option<String>,
    pub professor_id: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    pub course: Option<String>,
    pub term: Option<String>,
    pub professor_id: Option<i64>,
    pub notes: Option<String>,
}
