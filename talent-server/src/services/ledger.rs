//! Payroll Ledger
//!
//! One payment per employee per calendar month (UTC). The UNIQUE index on
//! `(employee_id, month_key)` is the authority: the lookup in
//! [`record_payment`] only short-circuits the common case, and a constraint
//! rejection is reported exactly like a pre-check hit.

use crate::calendar;
use crate::db::{RepoError, payment};
use crate::error::{ServiceError, ServiceResult};
use crate::validation::validate_positive_amount;
use shared::models::{Payment, PaymentCreate, PaymentHistory};
use shared::request::PaginationQuery;
use sqlx::SqlitePool;

/// Idempotent creation keyed on `(employee_id, month_key)`
pub async fn record_payment(pool: &SqlitePool, data: PaymentCreate) -> ServiceResult<Payment> {
    validate_positive_amount(data.amount, "amount")?;

    let month_key = calendar::month_key(data.date);
    if payment::find_by_employee_month(pool, data.employee_id, &month_key)
        .await?
        .is_some()
    {
        tracing::warn!(employee_id = data.employee_id, month_key = %month_key, "Payment already recorded");
        return Err(ServiceError::DuplicatePayment {
            employee_id: data.employee_id,
            month_key,
        });
    }

    insert_once(pool, &data).await
}

/// Insert and report a unique-index rejection as `DuplicatePayment`
pub(crate) async fn insert_once(pool: &SqlitePool, data: &PaymentCreate) -> ServiceResult<Payment> {
    match payment::insert(pool, data).await {
        Ok(stored) => {
            tracing::info!(
                payment_id = stored.id,
                employee_id = stored.employee_id,
                month_key = %stored.month_key,
                amount = stored.amount,
                "Payment recorded"
            );
            Ok(stored)
        }
        Err(RepoError::Duplicate(_)) => {
            let month_key = calendar::month_key(data.date);
            tracing::warn!(
                employee_id = data.employee_id,
                month_key = %month_key,
                "Payment rejected by unique index (concurrent insert)"
            );
            Err(ServiceError::DuplicatePayment {
                employee_id: data.employee_id,
                month_key,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Date-ordered history for one employee with the unpaginated total
pub async fn history(
    pool: &SqlitePool,
    employee_id: i64,
    pagination: &PaginationQuery,
) -> ServiceResult<PaymentHistory> {
    let (history, total) =
        payment::find_history(pool, employee_id, pagination.page(), pagination.limit()).await?;
    Ok(PaymentHistory { history, total })
}

pub async fn list_all(pool: &SqlitePool) -> ServiceResult<Vec<Payment>> {
    Ok(payment::find_all(pool).await?)
}

/// Frees the `(employee_id, month_key)` slot
pub async fn remove(pool: &SqlitePool, id: i64) -> ServiceResult<bool> {
    let deleted = payment::delete(pool, id).await?;
    if deleted {
        tracing::info!(payment_id = id, "Payment removed");
    }
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn pay(employee_id: i64, date: &str, amount: f64) -> PaymentCreate {
        PaymentCreate {
            employee_id,
            date: date.parse().unwrap(),
            amount,
        }
    }

    fn page(page: &str, limit: &str) -> PaginationQuery {
        PaginationQuery {
            page: Some(page.to_string()),
            limit: Some(limit.to_string()),
        }
    }

    #[tokio::test]
    async fn test_index_rejection_reports_duplicate_payment() {
        let db = DbService::in_memory().await.unwrap();
        payment::insert(&db.pool, &pay(3, "2024-06-01T00:00:00Z", 100.0))
            .await
            .unwrap();

        // Skips the lookup, as a writer that lost the race would
        let err = insert_once(&db.pool, &pay(3, "2024-06-30T23:59:59Z", 200.0))
            .await
            .unwrap_err();
        match err {
            ServiceError::DuplicatePayment {
                employee_id,
                month_key,
            } => {
                assert_eq!(employee_id, 3);
                assert_eq!(month_key, "2024-6");
            }
            other => panic!("expected DuplicatePayment, got {other:?}"),
        }
        assert_eq!(list_all(&db.pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_back_to_back_payments_for_free_slots_all_succeed() {
        let db = DbService::in_memory().await.unwrap();
        for employee_id in 1..=3000 {
            record_payment(&db.pool, pay(employee_id, "2024-01-15T00:00:00Z", 10.0))
                .await
                .unwrap();
        }
        assert_eq!(list_all(&db.pool).await.unwrap().len(), 3000);
    }

    #[tokio::test]
    async fn test_second_payment_same_month_conflicts() {
        let db = DbService::in_memory().await.unwrap();
        let first = record_payment(&db.pool, pay(1, "2024-01-15T00:00:00Z", 4500.0))
            .await
            .unwrap();
        assert_eq!(first.month_key, "2024-1");

        let err = record_payment(&db.pool, pay(1, "2024-01-28T00:00:00Z", 4500.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::DuplicatePayment { employee_id: 1, ref month_key } if month_key == "2024-1"
        ));

        let history = history(&db.pool, 1, &PaginationQuery::default()).await.unwrap();
        assert_eq!(history.total, 1);
        assert_eq!(history.history[0].id, first.id);
    }

    #[tokio::test]
    async fn test_invalid_amount_is_rejected() {
        let db = DbService::in_memory().await.unwrap();
        for amount in [0.0, -10.0, f64::NAN] {
            let err = record_payment(&db.pool, pay(1, "2024-01-15T00:00:00Z", amount))
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Validation { .. }));
        }
        assert!(list_all(&db.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_pages() {
        let db = DbService::in_memory().await.unwrap();
        let mut ids = Vec::new();
        for month in 1..=5 {
            let stored = record_payment(
                &db.pool,
                pay(1, &format!("2024-0{month}-05T12:00:00Z"), 100.0 * month as f64),
            )
            .await
            .unwrap();
            ids.push(stored.id);
        }

        let second = history(&db.pool, 1, &page("2", "2")).await.unwrap();
        assert_eq!(second.total, 5);
        let got: Vec<i64> = second.history.iter().map(|p| p.id).collect();
        assert_eq!(got, ids[2..4].to_vec());

        let all = history(&db.pool, 1, &page("2", "abc")).await.unwrap();
        assert_eq!(all.history.len(), 5);
        assert_eq!(all.total, 5);

        // page < 1 is read as the first page
        let first = history(&db.pool, 1, &page("0", "2")).await.unwrap();
        assert_eq!(first.history[0].id, ids[0]);
    }

    #[tokio::test]
    async fn test_remove_frees_month() {
        let db = DbService::in_memory().await.unwrap();
        let first = record_payment(&db.pool, pay(1, "2024-01-15T00:00:00Z", 4500.0))
            .await
            .unwrap();
        assert!(remove(&db.pool, first.id).await.unwrap());

        let again = record_payment(&db.pool, pay(1, "2024-01-02T00:00:00Z", 4500.0))
            .await
            .unwrap();
        assert_eq!(again.month_key, "2024-1");
    }
}
