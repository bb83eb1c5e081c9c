//! Work Sheet Repository

use super::RepoResult;
use super::query_builder::QueryBuilder;
use crate::calendar::{self, MonthRange};
use shared::models::{WorkSheet, WorkSheetCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, employee_id, name, date, hours, task";

#[derive(Debug, sqlx::FromRow)]
struct WorkSheetRow {
    id: i64,
    employee_id: i64,
    name: String,
    date: i64,
    hours: f64,
    task: String,
}

impl From<WorkSheetRow> for WorkSheet {
    fn from(row: WorkSheetRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            name: row.name,
            date: calendar::from_millis(row.date),
            hours: row.hours,
            task: row.task,
        }
    }
}

/// Resolved listing filter; the month is already a half-open range
#[derive(Debug, Clone, Default)]
pub struct WorkSheetQuery {
    pub name: Option<String>,
    pub range: Option<MonthRange>,
}

pub async fn insert(pool: &SqlitePool, data: WorkSheetCreate) -> RepoResult<WorkSheet> {
    let now = shared::util::now_millis();
    let date = data.date.timestamp_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO work_sheets (employee_id, name, date, hours, task, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(&data.name)
    .bind(date)
    .bind(data.hours)
    .bind(&data.task)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(WorkSheet {
        id,
        employee_id: data.employee_id,
        name: data.name,
        date: calendar::from_millis(date),
        hours: data.hours,
        task: data.task,
    })
}

/// Filtered listing, both filters combine with AND, ordered by date
pub async fn find_all(pool: &SqlitePool, query: &WorkSheetQuery) -> RepoResult<Vec<WorkSheet>> {
    let mut qb = QueryBuilder::new();
    if let Some(name) = &query.name {
        qb.add_condition("name = ?").bind_text(name.as_str());
    }
    if let Some(range) = &query.range {
        qb.add_half_open_range("date", range.start_millis(), range.end_millis());
    }

    let sql = format!(
        "SELECT {COLUMNS} FROM work_sheets{} ORDER BY date, id",
        qb.build_where_clause()
    );
    let rows = qb
        .apply_bindings(sqlx::query_as::<_, WorkSheetRow>(&sql))
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(WorkSheet::from).collect())
}

pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<WorkSheet>> {
    let sql = format!("SELECT {COLUMNS} FROM work_sheets WHERE employee_id = ? ORDER BY date, id");
    let rows = sqlx::query_as::<_, WorkSheetRow>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(WorkSheet::from).collect())
}

/// Returns whether a row was deleted
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM work_sheets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;
    use crate::db::DbService;

    fn entry(employee_id: i64, name: &str, date: &str) -> WorkSheetCreate {
        WorkSheetCreate {
            employee_id,
            name: name.to_string(),
            date: date.parse().unwrap(),
            hours: 8.0,
            task: "Sales".to_string(),
        }
    }

    fn month(raw: &str) -> WorkSheetQuery {
        WorkSheetQuery {
            name: None,
            range: Some(Month::parse(raw).unwrap().range()),
        }
    }

    #[tokio::test]
    async fn test_month_filter_is_half_open() {
        let db = DbService::in_memory().await.unwrap();
        let feb_first = insert(&db.pool, entry(1, "Alice", "2024-02-01T00:00:00Z"))
            .await
            .unwrap();
        let mar_first = insert(&db.pool, entry(1, "Alice", "2024-03-01T00:00:00Z"))
            .await
            .unwrap();

        let feb: Vec<i64> = find_all(&db.pool, &month("2024-02"))
            .await
            .unwrap()
            .iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(feb, vec![feb_first.id]);

        assert!(find_all(&db.pool, &month("2024-01")).await.unwrap().is_empty());

        let mar = find_all(&db.pool, &month("2024-03")).await.unwrap();
        assert_eq!(mar.len(), 1);
        assert_eq!(mar[0].id, mar_first.id);
    }

    #[tokio::test]
    async fn test_filters_combine() {
        let db = DbService::in_memory().await.unwrap();
        insert(&db.pool, entry(1, "Alice", "2024-02-10T09:00:00Z")).await.unwrap();
        insert(&db.pool, entry(2, "Bob", "2024-02-11T09:00:00Z")).await.unwrap();
        insert(&db.pool, entry(1, "Alice", "2024-04-02T09:00:00Z")).await.unwrap();

        let all = find_all(&db.pool, &WorkSheetQuery::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let by_name = WorkSheetQuery {
            name: Some("Alice".to_string()),
            range: None,
        };
        assert_eq!(find_all(&db.pool, &by_name).await.unwrap().len(), 2);

        let both = WorkSheetQuery {
            name: Some("Alice".to_string()),
            range: Some(Month::parse("2024-02").unwrap().range()),
        };
        let found = find_all(&db.pool, &both).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alice");
        assert_eq!(found[0].date.to_rfc3339(), "2024-02-10T09:00:00+00:00");

        // Exact match only
        let partial = WorkSheetQuery {
            name: Some("Ali".to_string()),
            range: None,
        };
        assert!(find_all(&db.pool, &partial).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_matches_listing() {
        let db = DbService::in_memory().await.unwrap();
        let stored = insert(&db.pool, entry(3, "Erin", "2024-07-04T12:00:00.987654Z"))
            .await
            .unwrap();
        let listed = find_by_employee(&db.pool, 3).await.unwrap();
        assert_eq!(listed[0].date, stored.date);
        assert_eq!(stored.date.timestamp_subsec_millis(), 987);
        assert_eq!(stored.date.timestamp_subsec_nanos(), 987_000_000);
    }

    #[tokio::test]
    async fn test_by_employee_and_delete() {
        let db = DbService::in_memory().await.unwrap();
        let first = insert(&db.pool, entry(7, "Carol", "2024-05-01T08:00:00Z")).await.unwrap();
        insert(&db.pool, entry(7, "Carol", "2024-05-02T08:00:00Z")).await.unwrap();
        insert(&db.pool, entry(8, "Dan", "2024-05-02T08:00:00Z")).await.unwrap();

        assert_eq!(find_by_employee(&db.pool, 7).await.unwrap().len(), 2);

        assert!(delete(&db.pool, first.id).await.unwrap());
        assert!(!delete(&db.pool, first.id).await.unwrap());
        assert_eq!(find_by_employee(&db.pool, 7).await.unwrap().len(), 1);
    }
}
