//! Ban audit trail API Handlers

use axum::{Json, extract::State};
use shared::error::AppResult;
use shared::models::{BannedUser, BannedUserCreate};

use crate::api::extract::ApiJson;
use crate::services::directory;
use crate::state::AppState;

/// List ban records, newest first
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BannedUser>>> {
    let records = directory::list_bans(state.pool()).await?;
    Ok(Json(records))
}

/// Ban an employee (status transition + audit record)
pub async fn ban(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BannedUserCreate>,
) -> AppResult<Json<BannedUser>> {
    let record = directory::ban(state.pool(), payload).await?;
    Ok(Json(record))
}
