//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Employee router
pub fn router() -> Router<AppState> {
    Router::new().nest("/user", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::register))
        // GET resolves the segment as an email, PUT/DELETE as an employee id
        .route(
            "/{key}",
            get(handler::get_by_email)
                .put(handler::update)
                .delete(handler::delete),
        )
}
