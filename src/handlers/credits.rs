//! Credit HTTP handlers.
//!
//! This module implements the credit API endpoints:
//! - GET /credits - List all credits
//! - GET /credits/{id} - Get credit by ID
//! - GET /credits/customer/{customer_id} - List a customer's credits
//! - GET /credits/{id}/customer/{customer_id} - Ownership check
//! - POST /credits - Create credit
//! - PUT /credits/{id} - Update credit
//! - POST /credits/payment - Pay down a credit
//! - POST /credits/{id}/consumption - Charge a consumption
//! - DELETE /credits/{id} - Delete credit
//! - POST /credits/{id}/transaction - Generic balance transaction
//! - GET /credits/customer/{customer_id}/debt - Overdue credits
//!
//! # Status Policy
//!
//! Lookups answer 200 with the value, or 404 when the lookup yields
//! nothing. The payment, consumption, and transaction endpoints
//! additionally downgrade ANY service error to 400; the remaining
//! endpoints let errors propagate to the 500 fallback in `AppError`.

use crate::{
    app::AppState,
    error::AppError,
    models::credit::{
        CreateCreditRequest, CreditResponse, CreditType, PaymentRequest, TransactionRequest,
        UpdateCreditRequest,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

/// List all credits.
///
/// # Response (200 OK)
///
/// Array of credits, possibly empty. An empty system is not an error.
pub async fn list_credits(
    State(state): State<AppState>,
) -> Result<Json<Vec<CreditResponse>>, AppError> {
    let credits = state.service.find_all().await?;

    Ok(Json(credits.into_iter().map(Into::into).collect()))
}

/// Get a specific credit by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the credit
/// - **Error (404)**: No credit with that id
pub async fn get_credit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CreditResponse>, AppError> {
    let credit = state
        .service
        .find_by_id(id)
        .await?
        // Return 404 if not found
        .ok_or(AppError::CreditNotFound)?;

    Ok(Json(credit.into()))
}

/// Query parameters for the customer listing endpoint.
#[derive(Debug, Deserialize)]
pub struct CustomerCreditsParams {
    /// Narrow the listing to one product kind
    pub credit_type: Option<CreditType>,
}

/// List all credits held by a customer.
///
/// # Endpoint
///
/// `GET /credits/customer/{customer_id}?credit_type=card`
///
/// The `credit_type` filter is optional. A customer with no matching
/// credits gets 200 and an empty array, never 404.
pub async fn list_credits_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Query(params): Query<CustomerCreditsParams>,
) -> Result<Json<Vec<CreditResponse>>, AppError> {
    let credits = state
        .service
        .find_by_customer_id(customer_id, params.credit_type)
        .await?;

    Ok(Json(credits.into_iter().map(Into::into).collect()))
}

/// Check whether a credit belongs to a customer.
///
/// # Endpoint
///
/// `GET /credits/{id}/customer/{customer_id}`
///
/// This is an existence predicate, not a fetch: a missing match answers
/// `false` with 200, never 404.
pub async fn credit_belongs_to_customer(
    State(state): State<AppState>,
    Path((id, customer_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<bool>, AppError> {
    let owned = state.service.belongs_to_customer(id, customer_id).await?;

    Ok(Json(owned))
}

/// Create a new credit.
///
/// # Response
///
/// - **Success (201 Created)**: Echoes the created credit
/// - **Error (500)**: Service or database failure
pub async fn create_credit(
    State(state): State<AppState>,
    Json(request): Json<CreateCreditRequest>,
) -> Result<(StatusCode, Json<CreditResponse>), AppError> {
    let credit = state.service.create(request).await?;

    Ok((StatusCode::CREATED, Json(credit.into())))
}

/// Update an existing credit.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the updated credit
/// - **Error (404)**: No credit with that id
pub async fn update_credit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCreditRequest>,
) -> Result<Json<CreditResponse>, AppError> {
    let credit = state
        .service
        .update(id, request)
        .await?
        .ok_or(AppError::CreditNotFound)?;

    Ok(Json(credit.into()))
}

/// Pay down a credit, addressed by credit number.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the credit with the reduced balance
/// - **Error (404)**: No credit carries the given number
/// - **Error (400)**: The payment was refused, for any reason
pub async fn make_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<CreditResponse>, AppError> {
    let credit = state
        .service
        .make_payment(request)
        .await
        // Any failure becomes 400, without inspecting the error kind
        .map_err(|_| AppError::OperationRejected)?
        .ok_or(AppError::CreditNotFound)?;

    Ok(Json(credit.into()))
}

/// Query parameters for the consumption endpoint.
#[derive(Debug, Deserialize)]
pub struct ConsumptionParams {
    /// Amount to draw, in cents
    pub amount_cents: i64,
}

/// Charge a consumption against a credit line.
///
/// # Endpoint
///
/// `POST /credits/{id}/consumption?amount_cents=12000`
///
/// # Response
///
/// - **Success (200 OK)**: Returns the credit with the increased balance
/// - **Error (404)**: No credit with that id
/// - **Error (400)**: The charge was refused, for any reason
pub async fn charge_consumption(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ConsumptionParams>,
) -> Result<Json<CreditResponse>, AppError> {
    let credit = state
        .service
        .charge_consumption(id, params.amount_cents)
        .await
        .map_err(|_| AppError::OperationRejected)?
        .ok_or(AppError::CreditNotFound)?;

    Ok(Json(credit.into()))
}

/// Delete a credit by ID.
///
/// Always answers 204 with no body; no existence check is performed.
pub async fn delete_credit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Apply a generic balance transaction to a credit.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the credit with the adjusted balance
/// - **Error (404)**: No credit with that id
/// - **Error (400)**: The transaction was refused, for any reason
pub async fn transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TransactionRequest>,
) -> Result<Json<CreditResponse>, AppError> {
    let credit = state
        .service
        .transaction(id, request)
        .await
        .map_err(|_| AppError::OperationRejected)?
        .ok_or(AppError::CreditNotFound)?;

    Ok(Json(credit.into()))
}

/// List a customer's overdue credits.
///
/// A customer with no overdue debt gets 200 and an empty array.
pub async fn list_customer_debt(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<Vec<CreditResponse>>, AppError> {
    let credits = state.service.find_debt_by_customer_id(customer_id).await?;

    Ok(Json(credits.into_iter().map(Into::into).collect()))
}
