//! Work Sheet API Module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/work-sheet", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // GET takes an employee id, DELETE a work sheet id
        .route("/{id}", get(handler::list_by_employee).delete(handler::delete))
}
