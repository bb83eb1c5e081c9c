//! talent-server - HR operations backend
//!
//! Employee directory, work sheets, the payroll ledger and a payment-intent
//! gateway, served over HTTP.
//!
//! # Module layout
//!
//! ```text
//! talent-server/src/
//! ├── api/          # axum routes and handlers
//! ├── services/     # domain rules (directory, worksheets, ledger, intent)
//! ├── db/           # SQLite pool, migrations, repositories
//! ├── stripe/       # payment gateway adapter
//! ├── calendar.rs   # UTC month buckets
//! ├── config.rs     # environment configuration
//! ├── error.rs      # ServiceError taxonomy
//! ├── logger.rs     # tracing subscriber
//! ├── server.rs     # listener + graceful shutdown
//! ├── state.rs      # AppState
//! └── validation.rs # input checks
//! ```

pub mod api;
pub mod calendar;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod server;
pub mod services;
pub mod state;
pub mod stripe;
pub mod validation;

pub use config::Config;
pub use db::DbService;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
