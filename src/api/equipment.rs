//! Equipment endpoints (inventory items and room-fixed units)

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
    models::{
        enums::EquipmentStatus,
        equipment::{
            CreateEquipment, CreateRoomUnit, Equipment, RoomUnit, SetEquipmentStatus,
            UpdateEquipment, UpdateRoomUnit,
        },
        loan::EquipmentLoanDetails,
    },
};

use super::rooms::AvailabilityResponse;

#[derive(Deserialize, IntoParams)]
pub struct ListEquipmentQuery {
    /// Restrict to one stored status
    pub status: Option<EquipmentStatus>,
}

/// List equipment, optionally by status
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(ListEquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<ListEquipmentQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list(query.status).await?;
    Ok(Json(equipment))
}

/// Get equipment by inventory code
#[utoipa::path(
    get,
    path = "/equipment/{code}",
    tag = "equipment",
    params(("code" = String, Path, description = "Inventory code")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_code(&code).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 409, description = "Duplicate inventory code")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment descriptive fields
#[utoipa::path(
    put,
    path = "/equipment/{code}",
    tag = "equipment",
    params(("code" = String, Path, description = "Inventory code")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let equipment = state
        .services
        .equipment
        .update_by_code(&code, &data)
        .await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{code}",
    tag = "equipment",
    params(("code" = String, Path, description = "Inventory code")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "Equipment is referenced by loans")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete_by_code(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Stored equipment availability
#[utoipa::path(
    get,
    path = "/equipment/{code}/availability",
    tag = "equipment",
    params(("code" = String, Path, description = "Inventory code")),
    responses(
        (status = 200, description = "Availability state", body = AvailabilityResponse),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn equipment_availability(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<AvailabilityResponse>> {
    let available = state
        .services
        .availability
        .is_equipment_available(&code)
        .await?;
    Ok(Json(AvailabilityResponse { code, available }))
}

/// Out-of-band status write (mark damaged / clear damaged)
#[utoipa::path(
    put,
    path = "/equipment/{code}/status",
    tag = "equipment",
    params(("code" = String, Path, description = "Inventory code")),
    request_body = SetEquipmentStatus,
    responses(
        (status = 200, description = "Status updated", body = Equipment),
        (status = 400, description = "in_use cannot be set manually"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn set_equipment_status(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
    Json(data): Json<SetEquipmentStatus>,
) -> AppResult<Json<Equipment>> {
    let equipment = state
        .services
        .availability
        .set_equipment_status(&code, data.status)
        .await?;
    Ok(Json(equipment))
}

/// Loan history of an equipment item
#[utoipa::path(
    get,
    path = "/equipment/{code}/loans",
    tag = "equipment",
    params(("code" = String, Path, description = "Inventory code")),
    responses(
        (status = 200, description = "Loans referencing this item", body = Vec<EquipmentLoanDetails>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn equipment_loans(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Vec<EquipmentLoanDetails>>> {
    let loans = state.services.loans.loans_for_equipment(&code).await?;
    Ok(Json(loans))
}

// Room-fixed units

/// List all room-fixed units
#[utoipa::path(
    get,
    path = "/units",
    tag = "equipment",
    responses(
        (status = 200, description = "Unit list", body = Vec<RoomUnit>)
    )
)]
pub async fn list_units(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<RoomUnit>>> {
    let units = state.services.equipment.list_units().await?;
    Ok(Json(units))
}

/// Get unit by ID
#[utoipa::path(
    get,
    path = "/units/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Unit ID")),
    responses(
        (status = 200, description = "Unit details", body = RoomUnit),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn get_unit(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RoomUnit>> {
    let unit = state.services.equipment.get_unit(id).await?;
    Ok(Json(unit))
}

/// Create room-fixed unit
#[utoipa::path(
    post,
    path = "/units",
    tag = "equipment",
    request_body = CreateRoomUnit,
    responses(
        (status = 201, description = "Unit created", body = RoomUnit),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Duplicate unit code")
    )
)]
pub async fn create_unit(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateRoomUnit>,
) -> AppResult<(StatusCode, Json<RoomUnit>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let unit = state.services.equipment.create_unit(&data).await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

/// Update room-fixed unit (description / maintenance flag / notes)
#[utoipa::path(
    put,
    path = "/units/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Unit ID")),
    request_body = UpdateRoomUnit,
    responses(
        (status = 200, description = "Unit updated", body = RoomUnit),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn update_unit(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateRoomUnit>,
) -> AppResult<Json<RoomUnit>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let unit = state.services.equipment.update_unit(id, &data).await?;
    Ok(Json(unit))
}

/// Delete room-fixed unit
#[utoipa::path(
    delete,
    path = "/units/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Unit ID")),
    responses(
        (status = 204, description = "Unit deleted"),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn delete_unit(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete_unit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
