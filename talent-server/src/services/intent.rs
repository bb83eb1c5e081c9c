//! Payment Intent Gateway adapter

use crate::error::{ServiceError, ServiceResult};
use crate::stripe::{PaymentGateway, to_minor_units};
use shared::error::ErrorCode;
use shared::models::PaymentIntentResponse;

/// Forward a card-charge intent for `amount` (major units) to the gateway
///
/// The client secret is returned verbatim. Any gateway failure surfaces as
/// `ServiceError::Gateway`.
pub async fn create_intent(
    gateway: &dyn PaymentGateway,
    amount: Option<f64>,
) -> ServiceResult<PaymentIntentResponse> {
    let invalid = |message: &str| ServiceError::Validation {
        code: ErrorCode::PaymentInvalidAmount,
        message: message.to_string(),
    };

    let amount = amount.ok_or_else(|| invalid("Salary is required"))?;
    let amount_minor = to_minor_units(amount)
        .filter(|minor| amount > 0.0 && *minor > 0)
        .ok_or_else(|| invalid("Salary must be a positive amount"))?;

    let client_secret = gateway
        .create_payment_intent(amount_minor)
        .await
        .map_err(|e| ServiceError::Gateway(e.to_string()))?;

    tracing::info!(amount_minor, "Payment intent created");
    Ok(PaymentIntentResponse { client_secret })
}
