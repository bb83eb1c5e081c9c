//! Employee Directory
//!
//! Registration, lookup, partial update, removal and the ban audit trail.

use crate::db::{RepoError, banned_user, employee};
use crate::error::{ServiceError, ServiceResult};
use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_email, validate_non_negative, validate_optional_text,
};
use shared::models::{BannedUser, BannedUserCreate, Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

/// Register a new employee; `isVerified` defaults to false, status to active
pub async fn register(pool: &SqlitePool, mut data: EmployeeCreate) -> ServiceResult<Employee> {
    data.email = data.email.trim().to_string();
    validate_email(&data.email)?;
    validate_optional_text(data.name.as_deref(), "name", MAX_NAME_LEN)?;
    if let Some(salary) = data.salary {
        validate_non_negative(salary, "salary")?;
    }

    if employee::find_by_email(pool, &data.email).await?.is_some() {
        return Err(ServiceError::DuplicateEmail(data.email));
    }

    let email = data.email.clone();
    match employee::create(pool, data).await {
        Ok(created) => {
            tracing::info!(employee_id = created.id, email = %created.email, "Employee registered");
            Ok(created)
        }
        // Lost the race against a concurrent registration
        Err(RepoError::Duplicate(msg)) if msg.contains("email") => {
            Err(ServiceError::DuplicateEmail(email))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn lookup_by_email(pool: &SqlitePool, email: &str) -> ServiceResult<Employee> {
    employee::find_by_email(pool, email.trim())
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Employee {email}")))
}

pub async fn list_all(pool: &SqlitePool) -> ServiceResult<Vec<Employee>> {
    Ok(employee::find_all(pool).await?)
}

/// Present fields replace stored values; absent fields are left unchanged
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> ServiceResult<Employee> {
    if let Some(salary) = data.salary {
        validate_non_negative(salary, "salary")?;
    }
    let updated = employee::update(pool, id, data).await?;
    tracing::info!(employee_id = id, status = ?updated.status, "Employee updated");
    Ok(updated)
}

/// Work sheets and payments referencing the employee are orphaned, not deleted
pub async fn remove(pool: &SqlitePool, id: i64) -> ServiceResult<bool> {
    let deleted = employee::delete(pool, id).await?;
    if deleted {
        tracing::info!(employee_id = id, "Employee removed");
    }
    Ok(deleted)
}

/// Transition the employee to `banned` and append the audit record
pub async fn ban(pool: &SqlitePool, data: BannedUserCreate) -> ServiceResult<BannedUser> {
    validate_optional_text(data.reason.as_deref(), "reason", MAX_NOTE_LEN)?;
    let record = banned_user::ban(pool, data.employee_id, data.reason.as_deref()).await?;
    tracing::warn!(employee_id = data.employee_id, reason = ?data.reason, "Employee banned");
    Ok(record)
}

pub async fn list_bans(pool: &SqlitePool) -> ServiceResult<Vec<BannedUser>> {
    Ok(banned_user::find_all(pool).await?)
}
