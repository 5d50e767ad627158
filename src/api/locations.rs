//! Campus and curriculum-project endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        campus::{Campus, CreateCampus, UpdateCampus},
        project::{CreateProject, Project, UpdateProject},
    },
};

// Campuses

/// List campuses
#[utoipa::path(
    get,
    path = "/campuses",
    tag = "locations",
    responses(
        (status = 200, description = "Campus list", body = Vec<Campus>)
    )
)]
pub async fn list_campuses(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Campus>>> {
    let campuses = state.services.campuses.list().await?;
    Ok(Json(campuses))
}

/// Get campus by ID
#[utoipa::path(
    get,
    path = "/campuses/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Campus ID")),
    responses(
        (status = 200, description = "Campus details", body = Campus),
        (status = 404, description = "Campus not found")
    )
)]
pub async fn get_campus(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Campus>> {
    let campus = state.services.campuses.get_by_id(id).await?;
    Ok(Json(campus))
}

/// Create campus
#[utoipa::path(
    post,
    path = "/campuses",
    tag = "locations",
    request_body = CreateCampus,
    responses(
        (status = 201, description = "Campus created", body = Campus),
        (status = 409, description = "Duplicate campus name")
    )
)]
pub async fn create_campus(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCampus>,
) -> AppResult<(StatusCode, Json<Campus>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let campus = state.services.campuses.create(&data).await?;
    Ok((StatusCode::CREATED, Json(campus)))
}

/// Update campus
#[utoipa::path(
    put,
    path = "/campuses/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Campus ID")),
    request_body = UpdateCampus,
    responses(
        (status = 200, description = "Campus updated", body = Campus),
        (status = 404, description = "Campus not found")
    )
)]
pub async fn update_campus(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateCampus>,
) -> AppResult<Json<Campus>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let campus = state.services.campuses.update(id, &data).await?;
    Ok(Json(campus))
}

/// Delete campus
#[utoipa::path(
    delete,
    path = "/campuses/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Campus ID")),
    responses(
        (status = 204, description = "Campus deleted"),
        (status = 404, description = "Campus not found"),
        (status = 409, description = "Campus is referenced by rooms")
    )
)]
pub async fn delete_campus(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.campuses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Projects

/// List curriculum projects
#[utoipa::path(
    get,
    path = "/projects",
    tag = "locations",
    responses(
        (status = 200, description = "Project list", body = Vec<Project>)
    )
)]
pub async fn list_projects(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.services.projects.list().await?;
    Ok(Json(projects))
}

/// Get project by ID
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project details", body = Project),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Project>> {
    let project = state.services.projects.get_by_id(id).await?;
    Ok(Json(project))
}

/// Create project
#[utoipa::path(
    post,
    path = "/projects",
    tag = "locations",
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 404, description = "Professor not found")
    )
)]
pub async fn create_project(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let project = state.services.projects.create(&data).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Update project
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Project ID")),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated", body = Project),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let project = state.services.projects.update(id, &data).await?;
    Ok(Json(project))
}

/// Delete project
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.projects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
