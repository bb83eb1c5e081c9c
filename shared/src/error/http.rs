//! HTTP status mapping

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::EmployeeNotFound => StatusCode::NOT_FOUND,
            Self::PaymentGatewayError => StatusCode::BAD_GATEWAY,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            // Validation and both duplicate conflicts
            Self::ValidationFailed
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::PaymentAlreadyRecorded
            | Self::PaymentInvalidAmount
            | Self::WorkSheetInvalidMonth
            | Self::EmployeeEmailExists => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::EmployeeNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicates_are_bad_request() {
        assert_eq!(ErrorCode::EmployeeEmailExists.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::PaymentAlreadyRecorded.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_system_status() {
        assert_eq!(ErrorCode::DatabaseError.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorCode::PaymentGatewayError.http_status(), StatusCode::BAD_GATEWAY);
    }
}
