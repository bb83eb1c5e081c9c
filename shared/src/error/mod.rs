//! Error codes and the HTTP error envelope shared by the talent platform
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::PaymentAlreadyRecorded).with_detail("monthKey", "2024-1");
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 5001);
//! assert_eq!(body.message, "User already paid in this month");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
