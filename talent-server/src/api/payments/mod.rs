//! Payroll API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/payment", routes())
        .route("/create-payment-intent", post(handler::create_intent))
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::record))
        // GET takes an employee id (history), DELETE a payment id
        .route("/{id}", get(handler::history).delete(handler::delete))
}
