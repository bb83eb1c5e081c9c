//! Payment Repository
//!
//! The UNIQUE index on `(employee_id, month_key)` is the enforcement point
//! for one payment per employee per month. [`insert`] is the atomic
//! "insert, report conflict" primitive; a lost race surfaces as
//! [`RepoError::Duplicate`].

use super::{RepoError, RepoResult};
use crate::calendar;
use shared::models::{Payment, PaymentCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, employee_id, date, amount, month_key";

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: i64,
    employee_id: i64,
    date: i64,
    amount: f64,
    month_key: String,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        // month_key is read back as stored, never re-derived
        Self {
            id: row.id,
            employee_id: row.employee_id,
            date: calendar::from_millis(row.date),
            amount: row.amount,
            month_key: row.month_key,
        }
    }
}

pub async fn find_by_employee_month(
    pool: &SqlitePool,
    employee_id: i64,
    month_key: &str,
) -> RepoResult<Option<Payment>> {
    let sql = format!("SELECT {COLUMNS} FROM payments WHERE employee_id = ? AND month_key = ? LIMIT 1");
    let row = sqlx::query_as::<_, PaymentRow>(&sql)
        .bind(employee_id)
        .bind(month_key)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Payment::from))
}

/// Insert with a freshly derived month key
pub async fn insert(pool: &SqlitePool, data: &PaymentCreate) -> RepoResult<Payment> {
    let now = shared::util::now_millis();
    let date = data.date.timestamp_millis();
    let month_key = calendar::month_key(data.date);

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO payments (employee_id, date, amount, month_key, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(date)
    .bind(data.amount)
    .bind(&month_key)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        // Only the (employee_id, month_key) index means "already paid"
        RepoError::Duplicate(msg) if !msg.contains("month_key") => RepoError::Database(msg),
        other => other,
    })?;

    Ok(Payment {
        id,
        employee_id: data.employee_id,
        date: calendar::from_millis(date),
        amount: data.amount,
        month_key,
    })
}

/// One page of an employee's payments ordered by date, plus the total count
///
/// `limit = None` returns every matching payment. `page` is 1-based. Both
/// statements read the same snapshot.
pub async fn find_history(
    pool: &SqlitePool,
    employee_id: i64,
    page: i64,
    limit: Option<i64>,
) -> RepoResult<(Vec<Payment>, i64)> {
    let mut tx = pool.begin().await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_one(&mut *tx)
        .await?;

    let rows = match limit {
        Some(limit) => {
            let offset = (page.max(1) - 1).saturating_mul(limit);
            let sql = format!(
                "SELECT {COLUMNS} FROM payments WHERE employee_id = ? ORDER BY date, id LIMIT ? OFFSET ?"
            );
            sqlx::query_as::<_, PaymentRow>(&sql)
                .bind(employee_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&mut *tx)
                .await?
        }
        None => {
            let sql = format!("SELECT {COLUMNS} FROM payments WHERE employee_id = ? ORDER BY date, id");
            sqlx::query_as::<_, PaymentRow>(&sql)
                .bind(employee_id)
                .fetch_all(&mut *tx)
                .await?
        }
    };

    tx.commit().await?;
    Ok((rows.into_iter().map(Payment::from).collect(), total))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Payment>> {
    let sql = format!("SELECT {COLUMNS} FROM payments ORDER BY date, id");
    let rows = sqlx::query_as::<_, PaymentRow>(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(Payment::from).collect())
}

/// Frees the `(employee_id, month_key)` slot
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM payments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
