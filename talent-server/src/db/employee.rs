//! Employee Repository

use super::{RepoError, RepoResult, banned_user};
use shared::models::{Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, email, name, role, is_verified, status, salary, created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employees ORDER BY email");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employees WHERE id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employees WHERE email = ? LIMIT 1");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

/// Insert a new employee; the UNIQUE index on `email` yields `RepoError::Duplicate`
pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employees (email, name, role, is_verified, status, salary, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7) RETURNING id",
    )
    .bind(&data.email)
    .bind(&data.name)
    .bind(data.role.unwrap_or_default())
    .bind(data.is_verified.unwrap_or(false))
    .bind(EmployeeStatus::Active)
    .bind(data.salary)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Merge the present fields into the stored record
///
/// An `Active -> Banned` transition appends a ban audit record in the same
/// transaction.
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    let current: Option<EmployeeStatus> =
        sqlx::query_scalar("SELECT status FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let current = current.ok_or_else(|| RepoError::NotFound(format!("Employee {id}")))?;

    sqlx::query(
        "UPDATE employees SET is_verified = COALESCE(?1, is_verified), role = COALESCE(?2, role), status = COALESCE(?3, status), salary = COALESCE(?4, salary), updated_at = ?5 WHERE id = ?6",
    )
    .bind(data.is_verified)
    .bind(data.role)
    .bind(data.status)
    .bind(data.salary)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if current == EmployeeStatus::Active && data.status == Some(EmployeeStatus::Banned) {
        banned_user::insert(&mut *tx, id, None, now).await?;
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id}")))
}

/// Hard delete; work sheets and payments referencing the employee are kept
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
