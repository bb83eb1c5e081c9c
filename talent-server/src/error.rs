//! Service-layer error type for talent-server
//!
//! `ServiceError` is the domain taxonomy. Repositories return `RepoError`,
//! services translate it (unique violations become conflicts) and the API
//! layer converts to `AppError` for the response envelope.

use crate::db::RepoError;
use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced id or email does not resolve
    #[error("{0} not found")]
    NotFound(String),

    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("Employee {employee_id} already paid in {month_key}")]
    DuplicatePayment { employee_id: i64, month_key: String },

    /// Missing or malformed input
    #[error("{message}")]
    Validation { code: ErrorCode, message: String },

    /// The external payment-intent capability failed
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// Unclassified persistence failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => ServiceError::NotFound(msg),
            // Callers that expect a conflict map Duplicate themselves
            RepoError::Duplicate(msg) | RepoError::Database(msg) => ServiceError::Storage(msg),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(resource) => {
                let code = if resource.starts_with("Employee") {
                    ErrorCode::EmployeeNotFound
                } else {
                    ErrorCode::NotFound
                };
                AppError::with_message(code, format!("{resource} not found"))
            }
            ServiceError::DuplicateEmail(email) => {
                AppError::new(ErrorCode::EmployeeEmailExists).with_detail("email", email)
            }
            ServiceError::DuplicatePayment {
                employee_id,
                month_key,
            } => AppError::new(ErrorCode::PaymentAlreadyRecorded)
                .with_detail("employeeId", employee_id)
                .with_detail("monthKey", month_key),
            ServiceError::Validation { code, message } => AppError::with_message(code, message),
            ServiceError::Gateway(err) => {
                tracing::error!(error = %err, "Payment gateway error");
                AppError::new(ErrorCode::PaymentGatewayError)
            }
            ServiceError::Storage(err) => {
                tracing::error!(error = %err, "Service storage error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
