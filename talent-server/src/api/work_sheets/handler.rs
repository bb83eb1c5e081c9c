//! Work Sheet API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use shared::error::AppResult;
use shared::models::{WorkSheet, WorkSheetCreate, WorkSheetFilter};

use crate::api::extract::{ApiJson, ApiPath};
use crate::services::worksheets;
use crate::state::AppState;

/// Filtered listing: `?name=&month=YYYY-MM`
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<WorkSheetFilter>,
) -> AppResult<Json<Vec<WorkSheet>>> {
    let entries = worksheets::list_all(state.pool(), &filter).await?;
    Ok(Json(entries))
}

pub async fn list_by_employee(
    State(state): State<AppState>,
    ApiPath(employee_id): ApiPath<i64>,
) -> AppResult<Json<Vec<WorkSheet>>> {
    let entries = worksheets::list_by_employee(state.pool(), employee_id).await?;
    Ok(Json(entries))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<WorkSheetCreate>,
) -> AppResult<Json<WorkSheet>> {
    let entry = worksheets::insert(state.pool(), payload).await?;
    Ok(Json(entry))
}

pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<bool>> {
    let deleted = worksheets::remove(state.pool(), id).await?;
    Ok(Json(deleted))
}
