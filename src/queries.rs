//! Read-only projections: date-ranged and employee-scoped filters over the
//! record store. No mutation anywhere in this module.

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;

use crate::error::{Error, Result};
use crate::model::{Attendance, Installment, Loan, Payment, VacationTaken};
use crate::store;

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::invalid(format!("date must be YYYY-MM-DD, got '{raw}'")))
}

async fn require_employee(pool: &SqlitePool, employee_id: i64) -> Result<()> {
    if store::employees::exists(pool, employee_id).await? {
        Ok(())
    } else {
        Err(Error::not_found("employee", employee_id))
    }
}

/// All attendance rows on the given date, in id order.
pub async fn attendance_on_date(pool: &SqlitePool, raw_date: &str) -> Result<Vec<Attendance>> {
    let date = parse_date(raw_date)?;
    Ok(store::attendance::list_on_date(pool, date).await?)
}

pub async fn loans_for(pool: &SqlitePool, employee_id: i64) -> Result<Vec<Loan>> {
    require_employee(pool, employee_id).await?;
    Ok(store::loans::list_for_employee(pool, employee_id).await?)
}

pub async fn installments_for(pool: &SqlitePool, employee_id: i64) -> Result<Vec<Installment>> {
    require_employee(pool, employee_id).await?;
    Ok(store::installments::list_for_employee(pool, employee_id).await?)
}

pub async fn vacations_taken_for(pool: &SqlitePool, employee_id: i64) -> Result<Vec<VacationTaken>> {
    require_employee(pool, employee_id).await?;
    Ok(store::vacations_taken::list_for_employee(pool, employee_id).await?)
}

pub async fn payments_for(pool: &SqlitePool, employee_id: i64) -> Result<Vec<Payment>> {
    require_employee(pool, employee_id).await?;
    Ok(store::payments::list_for_employee(pool, employee_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_db;
    use crate::money::to_cents;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2026-01-14").unwrap(), date("2026-01-14"));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        for raw in ["14/01/2026", "2026-13-01", "not-a-date", ""] {
            let err = parse_date(raw).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "accepted {raw:?}");
        }
    }

    #[actix_web::test]
    async fn attendance_on_date_filters_and_orders_by_id() {
        let pool = init_memory_db().await;
        let emp = store::employees::insert(&pool, "Ana", "555-0100", date("2023-01-09"))
            .await
            .unwrap()
            .id;
        store::attendance::insert(&pool, emp, date("2026-01-12"), true)
            .await
            .unwrap();
        store::attendance::insert(&pool, emp, date("2026-01-13"), false)
            .await
            .unwrap();
        store::attendance::insert(&pool, emp, date("2026-01-12"), false)
            .await
            .unwrap();

        let rows = attendance_on_date(&pool, "2026-01-12").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].id < rows[1].id);
        assert!(rows.iter().all(|r| r.date == date("2026-01-12")));
    }

    #[actix_web::test]
    async fn attendance_on_date_rejects_malformed_input() {
        let pool = init_memory_db().await;
        let err = attendance_on_date(&pool, "tomorrow").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[actix_web::test]
    async fn projections_require_an_existing_employee() {
        let pool = init_memory_db().await;

        assert!(matches!(
            loans_for(&pool, 99).await.unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            installments_for(&pool, 99).await.unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            vacations_taken_for(&pool, 99).await.unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            payments_for(&pool, 99).await.unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[actix_web::test]
    async fn loans_for_returns_only_that_employees_loans() {
        let pool = init_memory_db().await;
        let a = store::employees::insert(&pool, "Ana", "555-0100", date("2023-01-09"))
            .await
            .unwrap()
            .id;
        let b = store::employees::insert(&pool, "Luis", "555-0101", date("2024-02-05"))
            .await
            .unwrap()
            .id;

        let cents = to_cents(Decimal::from_str("300.00").unwrap()).unwrap();
        let weekly = to_cents(Decimal::from_str("100.00").unwrap()).unwrap();
        store::loans::insert(&pool, a, cents, weekly, "tools", date("2026-01-05"))
            .await
            .unwrap();
        store::loans::insert(&pool, b, cents, weekly, "rent", date("2026-01-06"))
            .await
            .unwrap();

        let loans = loans_for(&pool, a).await.unwrap();
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].employee_id, a);
        assert_eq!(loans[0].reason, "tools");
    }
}
