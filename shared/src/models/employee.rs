//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum EmployeeRole {
    #[default]
    Worker,
    Hr,
    Admin,
}

/// Employee account status
///
/// The single authoritative ban flag; `BannedUser` records are an audit
/// trail of transitions into `Banned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum EmployeeStatus {
    #[default]
    Active,
    Banned,
}

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    /// Unique across all employees
    pub email: String,
    pub name: Option<String>,
    pub role: EmployeeRole,
    pub is_verified: bool,
    pub status: EmployeeStatus,
    pub salary: Option<f64>,
    pub created_at: i64,
    /// Last time any field was written (Unix millis)
    pub updated_at: i64,
}

/// Register employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub email: String,
    pub name: Option<String>,
    pub role: Option<EmployeeRole>,
    pub is_verified: Option<bool>,
    pub salary: Option<f64>,
}

/// Partial update payload
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub is_verified: Option<bool>,
    pub role: Option<EmployeeRole>,
    pub status: Option<EmployeeStatus>,
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_accepts_partial_body() {
        let update: EmployeeUpdate = serde_json::from_str(r#"{"salary": 5000}"#).unwrap();
        assert_eq!(update.salary, Some(5000.0));
        assert!(update.is_verified.is_none());
        assert!(update.role.is_none());
        assert!(update.status.is_none());
    }

    #[test]
    fn test_role_and_status_wire_names() {
        let update: EmployeeUpdate =
            serde_json::from_str(r#"{"role": "hr", "status": "banned", "isVerified": true}"#)
                .unwrap();
        assert_eq!(update.role, Some(EmployeeRole::Hr));
        assert_eq!(update.status, Some(EmployeeStatus::Banned));
        assert_eq!(update.is_verified, Some(true));

        assert!(serde_json::from_str::<EmployeeUpdate>(r#"{"role": "boss"}"#).is_err());
    }
}
