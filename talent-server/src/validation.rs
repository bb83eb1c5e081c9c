//! Input validation helpers
//!
//! Text length limits and numeric checks shared by the services. SQLite
//! TEXT and REAL columns enforce neither, so every write goes through here.

use crate::error::ServiceError;
use shared::error::ErrorCode;

// ── Text length limits ──────────────────────────────────────────────

/// Display names (employee name, work sheet label)
pub const MAX_NAME_LEN: usize = 200;

/// Free text: work sheet task, ban reason
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Text ────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation {
            code: ErrorCode::RequiredField,
            message: format!("{field} must not be empty"),
        });
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), ServiceError> {
    match value {
        Some(v) => validate_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_len(value: &str, field: &str, max_len: usize) -> Result<(), ServiceError> {
    if value.len() > max_len {
        return Err(ServiceError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Non-empty, contains `@` with text on both sides, at most [`MAX_EMAIL_LEN`].
pub fn validate_email(email: &str) -> Result<(), ServiceError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ServiceError::Validation {
            code: ErrorCode::InvalidFormat,
            message: format!("Invalid email address: {email}"),
        }),
    }
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Finite and `>= 0` (hours, salary)
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), ServiceError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ServiceError::validation(format!(
            "{field} must be a non-negative number: {value}"
        )));
    }
    Ok(())
}

/// Finite and `> 0` (payment amounts)
pub fn validate_positive_amount(value: f64, field: &str) -> Result<(), ServiceError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ServiceError::Validation {
            code: ErrorCode::PaymentInvalidAmount,
            message: format!("{field} must be a positive number: {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(result: Result<(), ServiceError>) -> Option<ErrorCode> {
        match result {
            Err(ServiceError::Validation { code, .. }) => Some(code),
            _ => None,
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Alice", "name", MAX_NAME_LEN).is_ok());
        assert_eq!(
            code_of(validate_required_text("   ", "name", MAX_NAME_LEN)),
            Some(ErrorCode::RequiredField)
        );
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            code_of(validate_required_text(&long, "name", MAX_NAME_LEN)),
            Some(ErrorCode::ValidationFailed)
        );
        assert!(validate_optional_text(None, "task", MAX_NOTE_LEN).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert_eq!(code_of(validate_email("")), Some(ErrorCode::RequiredField));
        assert_eq!(
            code_of(validate_email("alice.example.com")),
            Some(ErrorCode::InvalidFormat)
        );
        assert_eq!(code_of(validate_email("@example.com")), Some(ErrorCode::InvalidFormat));
        let long = format!("{}@example.com", "a".repeat(MAX_EMAIL_LEN));
        assert!(validate_email(&long).is_err());
    }

    #[test]
    fn test_numbers() {
        assert!(validate_non_negative(0.0, "hours").is_ok());
        assert!(validate_non_negative(-0.5, "hours").is_err());
        assert!(validate_non_negative(f64::NAN, "hours").is_err());

        assert!(validate_positive_amount(0.01, "amount").is_ok());
        assert_eq!(
            code_of(validate_positive_amount(0.0, "amount")),
            Some(ErrorCode::PaymentInvalidAmount)
        );
        assert!(validate_positive_amount(f64::INFINITY, "amount").is_err());
    }
}
