//! Borrower registry endpoints (students and professors)

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
        loan::BorrowerLoans,
        professor::{CreateProfessor, Professor, UpdateProfessor},
        student::{CreateStudent, Student, UpdateStudent},
    },
};

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Name or code substring
    pub q: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct BorrowerLoansQuery {
    /// Only loans with an unset close timestamp
    pub open: Option<bool>,
}

// Students

/// List / search students
#[utoipa::path(
    get,
    path = "/students",
    tag = "borrowers",
    params(SearchQuery),
    responses(
        (status = 200, description = "Student list", body = Vec<Student>)
    )
)]
pub async fn list_students(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.students.search(query.q.as_deref()).await?;
    Ok(Json(students))
}

/// Get student by code
#[utoipa::path(
    get,
    path = "/students/{code}",
    tag = "borrowers",
    params(("code" = String, Path, description = "Student code")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Student>> {
    let student = state.services.students.get_by_code(&code).await?;
    Ok(Json(student))
}

/// Create student
#[utoipa::path(
    post,
    path = "/students",
    tag = "borrowers",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 409, description = "Duplicate student code")
    )
)]
pub async fn create_student(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let student = state.services.students.create(&data).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Update student
#[utoipa::path(
    put,
    path = "/students/{code}",
    tag = "borrowers",
    params(("code" = String, Path, description = "Student code")),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
    Json(data): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let student = state.services.students.update_by_code(&code, &data).await?;
    Ok(Json(student))
}

/// Delete student
#[utoipa::path(
    delete,
    path = "/students/{code}",
    tag = "borrowers",
    params(("code" = String, Path, description = "Student code")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Student is referenced by loans")
    )
)]
pub async fn delete_student(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.services.students.delete_by_code(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Loans held by a student
#[utoipa::path(
    get,
    path = "/students/{code}/loans",
    tag = "borrowers",
    params(
        ("code" = String, Path, description = "Student code"),
        BorrowerLoansQuery
    ),
    responses(
        (status = 200, description = "Student's loans", body = BorrowerLoans),
        (status = 404, description = "Student not found")
    )
)]
pub async fn student_loans(
    State(state): State<crate::AppState>,
    Path(code): Path<String>,
    Query(query): Query<BorrowerLoansQuery>,
) -> AppResult<Json<BorrowerLoans>> {
    let loans = state
        .services
        .loans
        .loans_for_student(&code, query.open.unwrap_or(false))
        .await?;
    Ok(Json(loans))
}

// Professors

/// List / search professors
#[utoipa::path(
    get,
    path = "/professors",
    tag = "borrowers",
    params(SearchQuery),
    responses(
        (status = 200, description = "Professor list", body = Vec<Professor>)
    )
)]
pub async fn list_professors(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Professor>>> {
    let professors = state.services.professors.search(query.q.as_deref()).await?;
    Ok(Json(professors))
}

/// Get professor by ID
#[utoipa::path(
    get,
    path = "/professors/{id}",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Professor ID")),
    responses(
        (status = 200, description = "Professor details", body = Professor),
        (status = 404, description = "Professor not found")
    )
)]
pub async fn get_professor(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Professor>> {
    let professor = state.services.professors.get_by_id(id).await?;
    Ok(Json(professor))
}

/// Create professor
#[utoipa::path(
    post,
    path = "/professors",
    tag = "borrowers",
    request_body = CreateProfessor,
    responses(
        (status = 201, description = "Professor created", body = Professor)
    )
)]
pub async fn create_professor(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateProfessor>,
) -> AppResult<(StatusCode, Json<Professor>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let professor = state.services.professors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(professor)))
}

/// Update professor
#[utoipa::path(
    put,
    path = "/professors/{id}",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Professor ID")),
    request_body = UpdateProfessor,
    responses(
        (status = 200, description = "Professor updated", body = Professor),
        (status = 404, description = "Professor not found")
    )
)]
pub async fn update_professor(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateProfessor>,
) -> AppResult<Json<Professor>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let professor = state.services.professors.update(id, &data).await?;
    Ok(Json(professor))
}

/// Loans held by a professor
#[utoipa::path(
    get,
    path = "/professors/{id}/loans",
    tag = "borrowers",
    params(
        ("id" = i64, Path, description = "Professor ID"),
        BorrowerLoansQuery
    ),
    responses(
        (status = 200, description = "Professor's loans", body = BorrowerLoans),
        (status = 404, description = "Professor not found")
    )
)]
pub async fn professor_loans(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Query(query): Query<BorrowerLoansQuery>,
) -> AppResult<Json<BorrowerLoans>> {
    let loans = state
        .services
        .loans
        .loans_for_professor(id, query.open.unwrap_or(false))
        .await?;
    Ok(Json(loans))
}

/// Delete professor
#[utoipa::path(
    delete,
    path = "/professors/{id}",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Professor ID")),
    responses(
        (status = 204, description = "Professor deleted"),
        (status = 404, description = "Professor not found"),
        (status = 409, description = "Professor is referenced by loans or projects")
    )
)]
pub async fn delete_professor(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.professors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
