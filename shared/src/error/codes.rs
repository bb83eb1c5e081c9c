//! Error codes, grouped by range
//!
//! - 0xxx: general (validation, lookup)
//! - 5xxx: payment ledger and payment intents
//! - 7xxx: work sheets
//! - 8xxx: employee directory
//! - 9xxx: system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialized as its bare `u16` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // General
    ValidationFailed = 2,
    NotFound = 3,
    InvalidFormat = 6,
    RequiredField = 7,

    // Payment
    /// Employee already has a payment in this calendar month
    PaymentAlreadyRecorded = 5001,
    /// Payment amount missing, non-finite or not positive
    PaymentInvalidAmount = 5002,

    // Work sheet
    /// Month filter is not a valid YYYY-MM value
    WorkSheetInvalidMonth = 7001,

    // Employee
    EmployeeNotFound = 8001,
    EmployeeEmailExists = 8002,

    // System
    DatabaseError = 9002,
    /// External payment gateway failed
    PaymentGatewayError = 9004,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default client-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::PaymentAlreadyRecorded => "User already paid in this month",
            ErrorCode::PaymentInvalidAmount => "Payment amount must be a positive number",
            ErrorCode::WorkSheetInvalidMonth => "Month must be formatted as YYYY-MM",
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeEmailExists => "Email already in use",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::PaymentGatewayError => "Payment service unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            5001 => Ok(ErrorCode::PaymentAlreadyRecorded),
            5002 => Ok(ErrorCode::PaymentInvalidAmount),
            7001 => Ok(ErrorCode::WorkSheetInvalidMonth),
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeEmailExists),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::PaymentGatewayError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
