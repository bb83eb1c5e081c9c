//! Payroll Payment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A payroll disbursement
///
/// `(employee_id, month_key)` is unique across all payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    /// Weak reference to the employee; never cascades
    pub employee_id: i64,
    pub date: DateTime<Utc>,
    pub amount: f64,
    /// Calendar month bucket, e.g. `"2024-1"`; assigned once at insert
    pub month_key: String,
}

/// Record payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub employee_id: i64,
    #[serde(with = "crate::util::instant")]
    pub date: DateTime<Utc>,
    pub amount: f64,
}

/// One page of an employee's payment history plus the unpaginated total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentHistory {
    pub history: Vec<Payment>,
    pub total: i64,
}

/// Payment intent request body (`{salary}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    pub salary: Option<f64>,
}

/// Payment intent response body (`{clientSecret}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}
