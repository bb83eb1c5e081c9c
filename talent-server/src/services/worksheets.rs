//! Worksheet Store

use crate::calendar::Month;
use crate::db::work_sheet::{self, WorkSheetQuery};
use crate::error::{ServiceError, ServiceResult};
use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_non_negative, validate_optional_text};
use shared::error::ErrorCode;
use shared::models::{WorkSheet, WorkSheetCreate, WorkSheetFilter};
use sqlx::SqlitePool;

pub async fn insert(pool: &SqlitePool, data: WorkSheetCreate) -> ServiceResult<WorkSheet> {
    validate_optional_text(Some(data.name.as_str()), "name", MAX_NAME_LEN)?;
    validate_optional_text(Some(data.task.as_str()), "task", MAX_NOTE_LEN)?;
    validate_non_negative(data.hours, "hours")?;
    Ok(work_sheet::insert(pool, data).await?)
}

/// Resolve the raw `?name=&month=` filter; empty values count as absent
fn resolve(filter: &WorkSheetFilter) -> ServiceResult<WorkSheetQuery> {
    let name = filter.name.as_deref().filter(|n| !n.is_empty());
    let month = filter.month.as_deref().map(str::trim).filter(|m| !m.is_empty());

    let range = month
        .map(|raw| {
            Month::parse(raw)
                .map(|m| m.range())
                .map_err(|e| ServiceError::Validation {
                    code: ErrorCode::WorkSheetInvalidMonth,
                    message: e.to_string(),
                })
        })
        .transpose()?;

    Ok(WorkSheetQuery {
        name: name.map(String::from),
        range,
    })
}

pub async fn list_all(pool: &SqlitePool, filter: &WorkSheetFilter) -> ServiceResult<Vec<WorkSheet>> {
    let query = resolve(filter)?;
    Ok(work_sheet::find_all(pool, &query).await?)
}

pub async fn list_by_employee(pool: &SqlitePool, employee_id: i64) -> ServiceResult<Vec<WorkSheet>> {
    Ok(work_sheet::find_by_employee(pool, employee_id).await?)
}

/// Deleting an absent entry is not an error
pub async fn remove(pool: &SqlitePool, id: i64) -> ServiceResult<bool> {
    Ok(work_sheet::delete(pool, id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn filter(name: Option<&str>, month: Option<&str>) -> WorkSheetFilter {
        WorkSheetFilter {
            name: name.map(String::from),
            month: month.map(String::from),
        }
    }

    #[test]
    fn test_resolve_empty_values_mean_no_filter() {
        let query = resolve(&filter(Some(""), Some(" "))).unwrap();
        assert!(query.name.is_none());
        assert!(query.range.is_none());
    }

    #[test]
    fn test_resolve_invalid_month() {
        let err = resolve(&filter(None, Some("2024-13"))).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation {
                code: ErrorCode::WorkSheetInvalidMonth,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_month_boundaries() {
        let db = DbService::in_memory().await.unwrap();
        for date in ["2024-02-01T00:00:00Z", "2024-03-01T00:00:00Z"] {
            insert(
                &db.pool,
                WorkSheetCreate {
                    employee_id: 1,
                    name: "Alice".into(),
                    date: date.parse().unwrap(),
                    hours: 4.0,
                    task: "Support".into(),
                },
            )
            .await
            .unwrap();
        }

        let feb = list_all(&db.pool, &filter(None, Some("2024-02"))).await.unwrap();
        assert_eq!(feb.len(), 1);
        assert_eq!(feb[0].date.to_rfc3339(), "2024-02-01T00:00:00+00:00");
        assert!(list_all(&db.pool, &filter(None, Some("2024-01"))).await.unwrap().is_empty());
        assert_eq!(list_all(&db.pool, &WorkSheetFilter::default()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_negative_hours_rejected() {
        let db = DbService::in_memory().await.unwrap();
        let err = insert(
            &db.pool,
            WorkSheetCreate {
                employee_id: 1,
                name: String::new(),
                date: "2024-02-01T00:00:00Z".parse().unwrap(),
                hours: -2.0,
                task: String::new(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
        assert!(list_by_employee(&db.pool, 1).await.unwrap().is_empty());
    }
}
