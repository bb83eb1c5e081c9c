//! Payroll API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use shared::error::AppResult;
use shared::models::{
    Payment, PaymentCreate, PaymentHistory, PaymentIntentRequest, PaymentIntentResponse,
};
use shared::request::PaginationQuery;

use crate::api::extract::{ApiJson, ApiPath};
use crate::services::{intent, ledger};
use crate::state::AppState;

/// List all payments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Payment>>> {
    let payments = ledger::list_all(state.pool()).await?;
    Ok(Json(payments))
}

/// Paginated history for an employee: `?page=&limit=`
pub async fn history(
    State(state): State<AppState>,
    ApiPath(employee_id): ApiPath<i64>,
    Query(pagination): Query<PaginationQuery>,
) -> AppResult<Json<PaymentHistory>> {
    let history = ledger::history(state.pool(), employee_id, &pagination).await?;
    Ok(Json(history))
}

/// Record a payment; at most one per employee per month
pub async fn record(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PaymentCreate>,
) -> AppResult<Json<Payment>> {
    let payment = ledger::record_payment(state.pool(), payload).await?;
    Ok(Json(payment))
}

pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<bool>> {
    let deleted = ledger::remove(state.pool(), id).await?;
    Ok(Json(deleted))
}

/// `{salary}` → `{clientSecret}`
pub async fn create_intent(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    let resp = intent::create_intent(state.gateway.as_ref(), payload.salary).await?;
    Ok(Json(resp))
}
