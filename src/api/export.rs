//! Table export endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, services::export::ExportReport};

/// Dump every table to per-table CSV files in the configured directory
#[utoipa::path(
    post,
    path = "/export",
    tag = "export",
    responses(
        (status = 200, description = "Export completed", body = ExportReport)
    )
)]
pub async fn export_tables(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ExportReport>> {
    let report = state.services.export.dump_all().await?;
    Ok(Json(report))
}
