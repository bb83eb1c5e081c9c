//! Ban audit trail Repository
//!
//! Records are append-only. `Employee.status` is authoritative; a record is
//! only ever written in the same transaction as the status transition.

use super::{RepoError, RepoResult};
use crate::calendar;
use shared::models::BannedUser;
use sqlx::{Executor, Sqlite, SqlitePool};

#[derive(Debug, sqlx::FromRow)]
struct BannedUserRow {
    id: i64,
    employee_id: i64,
    reason: Option<String>,
    banned_at: i64,
}

impl From<BannedUserRow> for BannedUser {
    fn from(row: BannedUserRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            reason: row.reason,
            banned_at: calendar::from_millis(row.banned_at),
        }
    }
}

/// Newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<BannedUser>> {
    let rows = sqlx::query_as::<_, BannedUserRow>(
        "SELECT id, employee_id, reason, banned_at FROM banned_users ORDER BY banned_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(BannedUser::from).collect())
}

/// Append an audit record on the caller's connection or transaction
pub(crate) async fn insert<'e, E>(
    executor: E,
    employee_id: i64,
    reason: Option<&str>,
    banned_at: i64,
) -> RepoResult<BannedUser>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO banned_users (employee_id, reason, banned_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(employee_id)
    .bind(reason)
    .bind(banned_at)
    .fetch_one(executor)
    .await?;

    Ok(BannedUser {
        id,
        employee_id,
        reason: reason.map(String::from),
        banned_at: calendar::from_millis(banned_at),
    })
}

/// Set `status = banned` and append the audit record atomically
pub async fn ban(pool: &SqlitePool, employee_id: i64, reason: Option<&str>) -> RepoResult<BannedUser> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    let rows = sqlx::query("UPDATE employees SET status = 'banned', updated_at = ? WHERE id = ?")
        .bind(now)
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {employee_id}")));
    }

    let record = insert(&mut *tx, employee_id, reason, now).await?;
    tx.commit().await?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbService, employee};
    use shared::models::{EmployeeCreate, EmployeeStatus};

    async fn seed(db: &DbService, email: &str) -> i64 {
        employee::create(
            &db.pool,
            EmployeeCreate {
                email: email.to_string(),
                name: None,
                role: None,
                is_verified: None,
                salary: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_ban_sets_status_and_appends_record() {
        let db = DbService::in_memory().await.unwrap();
        let id = seed(&db, "mallory@example.com").await;

        let record = ban(&db.pool, id, Some("policy violation")).await.unwrap();
        assert_eq!(record.employee_id, id);
        assert_eq!(record.reason.as_deref(), Some("policy violation"));

        let stored = employee::find_by_id(&db.pool, id).await.unwrap().unwrap();
        assert_eq!(stored.status, EmployeeStatus::Banned);
        assert_eq!(find_all(&db.pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ban_missing_employee_writes_nothing() {
        let db = DbService::in_memory().await.unwrap();
        let err = ban(&db.pool, 404, None).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert!(find_all(&db.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let db = DbService::in_memory().await.unwrap();
        let a = seed(&db, "a@example.com").await;
        let b = seed(&db, "b@example.com").await;
        insert(&db.pool, a, None, 1_000).await.unwrap();
        insert(&db.pool, b, None, 2_000).await.unwrap();

        let records = find_all(&db.pool).await.unwrap();
        let order: Vec<i64> = records.iter().map(|r| r.employee_id).collect();
        assert_eq!(order, vec![b, a]);
    }
}
