//! Loan lifecycle endpoints
//!
//! Loan ids are per-table, so every loan is addressed as (kind, id) with
//! kind one of room_student, room_professor, equipment_student,
//! equipment_professor.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{
        enums::LoanKind,
        loan::{
            CheckoutEquipment, CheckoutRoom, EquipmentLoanDetails, LoanRecord, LoanRef,
            ReturnLoan, RoomLoanDetails,
        },
    },
};

#[derive(Deserialize, IntoParams)]
pub struct ListLoansQuery {
    /// Only loans with an unset close timestamp
    pub open: Option<bool>,
}

/// Loans of one kind; room and equipment kinds carry different fields
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum LoanListing {
    Room(Vec<RoomLoanDetails>),
    Equipment(Vec<EquipmentLoanDetails>),
}

/// Checkout response
#[derive(Serialize, ToSchema)]
pub struct CheckoutResponse {
    #[serde(flatten)]
    pub loan: LoanRef,
    pub message: String,
}

/// Return response
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    pub status: String,
}

/// Record a room checkout
#[utoipa::path(
    post,
    path = "/loans/rooms",
    tag = "loans",
    request_body = CheckoutRoom,
    responses(
        (status = 201, description = "Loan created", body = CheckoutResponse),
        (status = 404, description = "Room, borrower or staff not found"),
        (status = 409, description = "Room is occupied")
    )
)]
pub async fn checkout_room(
    State(state): State<crate::AppState>,
    Json(request): Json<CheckoutRoom>,
) -> AppResult<(StatusCode, Json<CheckoutResponse>)> {
    let loan = state.services.availability.checkout_room(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            loan,
            message: "Room checked out".to_string(),
        }),
    ))
}

/// Record an equipment hand-out
#[utoipa::path(
    post,
    path = "/loans/equipment",
    tag = "loans",
    request_body = CheckoutEquipment,
    responses(
        (status = 201, description = "Loan created", body = CheckoutResponse),
        (status = 404, description = "Equipment, borrower or staff not found"),
        (status = 409, description = "Equipment not available")
    )
)]
pub async fn checkout_equipment(
    State(state): State<crate::AppState>,
    Json(request): Json<CheckoutEquipment>,
) -> AppResult<(StatusCode, Json<CheckoutResponse>)> {
    let loan = state
        .services
        .availability
        .checkout_equipment(&request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            loan,
            message: "Equipment handed out".to_string(),
        }),
    ))
}

/// List loans of one kind
#[utoipa::path(
    get,
    path = "/loans/{kind}",
    tag = "loans",
    params(
        ("kind" = LoanKind, Path, description = "Loan table"),
        ListLoansQuery
    ),
    responses(
        (status = 200, description = "Loan list", body = LoanListing)
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
    Path(kind): Path<LoanKind>,
    Query(query): Query<ListLoansQuery>,
) -> AppResult<Json<LoanListing>> {
    let open_only = query.open.unwrap_or(false);
    let listing = if kind.is_room() {
        LoanListing::Room(state.services.loans.list_room_loans(kind, open_only).await?)
    } else {
        LoanListing::Equipment(
            state
                .services
                .loans
                .list_equipment_loans(kind, open_only)
                .await?,
        )
    };
    Ok(Json(listing))
}

/// Get a loan by (kind, id)
#[utoipa::path(
    get,
    path = "/loans/{kind}/{id}",
    tag = "loans",
    params(
        ("kind" = LoanKind, Path, description = "Loan table"),
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan record", body = LoanRecord),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path((kind, id)): Path<(LoanKind, i64)>,
) -> AppResult<Json<LoanRecord>> {
    let loan = state.services.loans.get(kind, id).await?;
    Ok(Json(loan))
}

/// Record a return
#[utoipa::path(
    post,
    path = "/loans/{kind}/{id}/return",
    tag = "loans",
    params(
        ("kind" = LoanKind, Path, description = "Loan table"),
        ("id" = i64, Path, description = "Loan ID")
    ),
    request_body = ReturnLoan,
    responses(
        (status = 200, description = "Loan closed", body = ReturnResponse),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Already returned")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Path((kind, id)): Path<(LoanKind, i64)>,
    Json(request): Json<ReturnLoan>,
) -> AppResult<Json<ReturnResponse>> {
    state
        .services
        .availability
        .return_loan(kind, id, &request)
        .await?;
    Ok(Json(ReturnResponse {
        status: "returned".to_string(),
    }))
}

/// Delete a loan record, compensating equipment status when it was open
#[utoipa::path(
    delete,
    path = "/loans/{kind}/{id}",
    tag = "loans",
    params(
        ("kind" = LoanKind, Path, description = "Loan table"),
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 204, description = "Loan deleted"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn delete_loan(
    State(state): State<crate::AppState>,
    Path((kind, id)): Path<(LoanKind, i64)>,
) -> AppResult<StatusCode> {
    state.services.availability.delete_loan(kind, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
