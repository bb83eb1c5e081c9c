//! Work Sheet Model (time entries)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single time entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSheet {
    pub id: i64,
    /// Weak reference to the employee; never cascades
    pub employee_id: i64,
    /// Display label, filterable on its own
    pub name: String,
    pub date: DateTime<Utc>,
    pub hours: f64,
    pub task: String,
}

/// Submit work sheet payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSheetCreate {
    #[serde(alias = "userId")]
    pub employee_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(with = "crate::util::instant")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub task: String,
}

/// Listing filter: `?name=&month=YYYY-MM`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkSheetFilter {
    pub name: Option<String>,
    pub month: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_accepts_legacy_user_id() {
        let create: WorkSheetCreate = serde_json::from_str(
            r#"{"userId": 42, "name": "Alice", "date": "2024-02-01", "hours": 6, "task": "Sales"}"#,
        )
        .unwrap();
        assert_eq!(create.employee_id, 42);
        assert_eq!(create.date.to_rfc3339(), "2024-02-01T00:00:00+00:00");
    }

    #[test]
    fn test_create_requires_date() {
        let result = serde_json::from_str::<WorkSheetCreate>(r#"{"employeeId": 1}"#);
        assert!(result.is_err());
    }
}
