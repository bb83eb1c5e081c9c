//! Stripe integration via REST API (no SDK dependency)
//!
//! Only payment-intent creation is needed. The gateway sits behind the
//! [`PaymentGateway`] trait so the service layer and tests never touch the
//! network directly.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// External card-payment capability
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a card payment intent for `amount_minor` smallest currency
    /// units and return its opaque client secret verbatim.
    async fn create_payment_intent(&self, amount_minor: i64) -> Result<String, BoxError>;
}

/// Major units → smallest currency unit (× 100, truncated)
pub fn to_minor_units(amount: f64) -> Option<i64> {
    let major = Decimal::from_f64(amount)?;
    major
        .checked_mul(Decimal::ONE_HUNDRED)?
        .trunc()
        .to_i64()
}

/// Stripe-backed [`PaymentGateway`]
#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
    currency: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>, api_base: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            currency: currency.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(&self, amount_minor: i64) -> Result<String, BoxError> {
        let amount = amount_minor.to_string();
        let resp: serde_json::Value = self
            .client
            .post(format!("{}/v1/payment_intents", self.api_base))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&[
                ("amount", amount.as_str()),
                ("currency", self.currency.as_str()),
                ("payment_method_types[]", "card"),
            ])
            .send()
            .await?
            .json()
            .await?;

        resp["client_secret"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| {
                let reason = resp["error"]["message"].as_str().unwrap_or("missing client_secret");
                format!("Stripe create_payment_intent failed: {reason}").into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_units_truncate() {
        assert_eq!(to_minor_units(4500.5), Some(450050));
        assert_eq!(to_minor_units(1234.567), Some(123456));
        assert_eq!(to_minor_units(0.01), Some(1));
    }

    #[test]
    fn test_minor_units_reject_non_finite() {
        assert_eq!(to_minor_units(f64::NAN), None);
        assert_eq!(to_minor_units(f64::INFINITY), None);
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let gateway = StripeGateway::new("sk_test", "http://localhost:12111/", "usd");
        assert_eq!(gateway.api_base, "http://localhost:12111");
    }
}
