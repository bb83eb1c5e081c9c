//! Shared types for the talent platform
//!
//! Common types used by the server and its clients: error codes and the
//! unified response envelope, domain models, request helpers and utilities.

pub mod error;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
