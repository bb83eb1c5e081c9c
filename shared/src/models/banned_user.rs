//! Ban audit record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only record of an employee entering `EmployeeStatus::Banned`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannedUser {
    pub id: i64,
    pub employee_id: i64,
    pub reason: Option<String>,
    pub banned_at: DateTime<Utc>,
}

/// Ban payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannedUserCreate {
    pub employee_id: i64,
    pub reason: Option<String>,
}
