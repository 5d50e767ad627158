//! Room endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::RoomUnit,
        loan::RoomLoanDetails,
        room::{CreateRoom, Room, RoomWithStatus, UpdateRoom},
    },
};

/// Availability probe response
#[derive(Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub code: String,
    pub available: bool,
}

/// List all rooms with their derived status
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "Room list", body = Vec<RoomWithStatus>)
    )
)]
pub async fn list_rooms(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<RoomWithStatus>>> {
    let rooms = state.services.rooms.list().await?;
    Ok(Json(rooms))
}

/// Get room by code
#[utoipa::path(
    get,
    path = "/rooms/{code}",
    tag = "rooms",
    params(("code" = String, Path, description = "Room internal code")),
    responses(
        (status = 200, description = "Room details", body = RoomWithStatus),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<RoomWithStatus>> {
    let room = state.services.rooms.get_by_code(&code).await?;
    Ok(Json(room))
}

/// Create room
#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    request_body = CreateRoom,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 409, description = "Duplicate room code")
    )
)]
pub async fn create_room(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let room = state.services.rooms.create(&data).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// Update room
#[utoipa::path(
    put,
    path = "/rooms/{code}",
    tag = "rooms",
    params(("code" = String, Path, description = "Room internal code")),
    request_body = UpdateRoom,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 404, description = "Room not found")
    )
)]
pub async fn update_room(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
    Json(data): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let room = state.services.rooms.update_by_code(&code, &data).await?;
    Ok(Json(room))
}

/// Delete room
#[utoipa::path(
    delete,
    path = "/rooms/{code}",
    tag = "rooms",
    params(("code" = String, Path, description = "Room internal code")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room is referenced by loans")
    )
)]
pub async fn delete_room(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.services.rooms.delete_by_code(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Derived room availability
#[utoipa::path(
    get,
    path = "/rooms/{code}/availability",
    tag = "rooms",
    params(("code" = String, Path, description = "Room internal code")),
    responses(
        (status = 200, description = "Availability state", body = AvailabilityResponse),
        (status = 404, description = "Room not found")
    )
)]
pub async fn room_availability(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<AvailabilityResponse>> {
    let available = state.services.availability.is_room_available(&code).await?;
    Ok(Json(AvailabilityResponse { code, available }))
}

/// Loan history of a room
#[utoipa::path(
    get,
    path = "/rooms/{code}/loans",
    tag = "rooms",
    params(("code" = String, Path, description = "Room internal code")),
    responses(
        (status = 200, description = "Loans referencing this room", body = Vec<RoomLoanDetails>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn room_loans(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Vec<RoomLoanDetails>>> {
    let loans = state.services.loans.loans_for_room(&code).await?;
    Ok(Json(loans))
}

/// Units fixed in a room
#[utoipa::path(
    get,
    path = "/rooms/{code}/units",
    tag = "rooms",
    params(("code" = String, Path, description = "Room internal code")),
    responses(
        (status = 200, description = "Room-fixed units", body = Vec<RoomUnit>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn room_units(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Vec<RoomUnit>>> {
    let units = state.services.equipment.list_units_by_room(&code).await?;
    Ok(Json(units))
}
