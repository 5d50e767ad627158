//! Error types for LabLoan server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable application error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    NoSuchResource = 3,
    NoSuchBorrower = 4,
    NoSuchLoan = 5,
    ResourceNotAvailable = 6,
    AlreadyReturned = 7,
    Duplicate = 8,
    BadValue = 9,
    NoSuchData = 10,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not available: {0}")]
    ResourceNotAvailable(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Borrower not found: {0}")]
    BorrowerNotFound(String),

    #[error("Loan {0} not found")]
    LoanNotFound(i64),

    #[error("Loan {0} already returned")]
    AlreadyReturned(i64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::ResourceNotAvailable(msg) => {
                (StatusCode::CONFLICT, ErrorCode::ResourceNotAvailable, msg.clone())
            }
            AppError::ResourceNotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchResource, msg.clone())
            }
            AppError::BorrowerNotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchBorrower, msg.clone())
            }
            AppError::LoanNotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchLoan, format!("Loan {} not found", id))
            }
            AppError::AlreadyReturned(id) => (
                StatusCode::CONFLICT,
                ErrorCode::AlreadyReturned,
                format!("Loan {} already returned", id),
            ),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Database(e) => match e {
                // Constraint violations are caller errors, not server failures
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => (
                    StatusCode::CONFLICT,
                    ErrorCode::Duplicate,
                    "Duplicate value".to_string(),
                ),
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => (
                    StatusCode::CONFLICT,
                    ErrorCode::DbFailure,
                    "Record is referenced by other records".to_string(),
                ),
                e => {
                    tracing::error!("Database error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::DbFailure,
                        "Database error".to_string(),
                    )
                }
            },
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
