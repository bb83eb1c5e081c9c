//! Data models
//!
//! Shared between talent-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY, assigned on insert).
//! Instants travel as RFC 3339 strings on the wire.

pub mod banned_user;
pub mod employee;
pub mod payment;
pub mod work_sheet;

// Re-exports
pub use banned_user::*;
pub use employee::*;
pub use payment::*;
pub use work_sheet::*;
