//! Health check endpoints

use axum::Json;

pub async fn root() -> &'static str {
    "Server is running"
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "talent-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
