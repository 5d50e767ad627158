//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Room occupancy counts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoomCounts {
    pub total: i64,
    pub available: i64,
    pub occupied: i64,
}

/// Equipment counts per stored status
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentCounts {
    pub total: i64,
    pub available: i64,
    pub in_use: i64,
    pub damaged: i64,
}

/// Room-fixed unit counts per maintenance flag
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UnitCounts {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

/// Open-loan and daily activity counts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoanCounts {
    pub open_room_student: i64,
    pub open_room_professor: i64,
    pub open_equipment_student: i64,
    pub open_equipment_professor: i64,
    pub open_total: i64,
    pub checkouts_today: i64,
    pub returns_today: i64,
}

/// Registered borrower counts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowerCounts {
    pub students: i64,
    pub professors: i64,
}

/// Full dashboard snapshot
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardSnapshot {
    pub rooms: RoomCounts,
    pub equipment: EquipmentCounts,
    pub units: UnitCounts,
    pub loans: LoanCounts,
    pub borrowers: BorrowerCounts,
    pub generated_at: DateTime<Utc>,
}

/// Get the dashboard snapshot. Served from the background refresher's cache
/// when available, recomputed on demand otherwise.
#[utoipa::path(
    get,
    path = "/stats/dashboard",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard counts", body = DashboardSnapshot)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardSnapshot>> {
    if let Some(snapshot) = state.services.dashboard.latest().await {
        return Ok(Json(snapshot));
    }
    let snapshot = state.services.stats.dashboard().await?;
    state.services.dashboard.store(snapshot.clone()).await;
    Ok(Json(snapshot))
}
