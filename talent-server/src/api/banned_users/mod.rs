//! Ban audit trail API Module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/banned-user", get(handler::list).post(handler::ban))
}
