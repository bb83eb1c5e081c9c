//! Employee API Handlers

use axum::{Json, extract::State};
use shared::error::AppResult;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::api::extract::{ApiJson, ApiPath};
use crate::services::directory;
use crate::state::AppState;

/// List all employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = directory::list_all(state.pool()).await?;
    Ok(Json(employees))
}

/// Lookup by email
pub async fn get_by_email(
    State(state): State<AppState>,
    ApiPath(email): ApiPath<String>,
) -> AppResult<Json<Employee>> {
    let employee = directory::lookup_by_email(state.pool(), &email).await?;
    Ok(Json(employee))
}

/// Register a new employee
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    let employee = directory::register(state.pool(), payload).await?;
    Ok(Json(employee))
}

/// Partial update
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let employee = directory::update(state.pool(), id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<bool>> {
    let deleted = directory::remove(state.pool(), id).await?;
    Ok(Json(deleted))
}
