//! Staff registry endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Staff, UpdateStaff},
};

#[derive(Deserialize, IntoParams)]
pub struct ListStaffQuery {
    /// Only active staff members
    pub active: Option<bool>,
}

/// List staff members
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    params(ListStaffQuery),
    responses(
        (status = 200, description = "Staff list", body = Vec<Staff>)
    )
)]
pub async fn list_staff(
    State(state): State<crate::AppState>,
    Query(query): Query<ListStaffQuery>,
) -> AppResult<Json<Vec<Staff>>> {
    let staff = state
        .services
        .staff
        .list(query.active.unwrap_or(false))
        .await?;
    Ok(Json(staff))
}

/// Get staff member by ID
#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i64, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff details", body = Staff),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn get_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Staff>> {
    let staff = state.services.staff.get_by_id(id).await?;
    Ok(Json(staff))
}

/// Create staff member
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff member created", body = Staff)
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let staff = state.services.staff.create(&data).await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

/// Update staff member
#[utoipa::path(
    put,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i64, Path, description = "Staff ID")),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Staff member updated", body = Staff),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn update_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateStaff>,
) -> AppResult<Json<Staff>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let staff = state.services.staff.update(id, &data).await?;
    Ok(Json(staff))
}

/// Delete staff member
#[utoipa::path(
    delete,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i64, Path, description = "Staff ID")),
    responses(
        (status = 204, description = "Staff member deleted"),
        (status = 404, description = "Staff member not found"),
        (status = 409, description = "Staff member is referenced by loans")
    )
)]
pub async fn delete_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.staff.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
