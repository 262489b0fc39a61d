use chrono::NaiveDate;
use sqlx::SqliteExecutor;

use crate::model::{Loan, LoanStatus};

/// The opening balance always equals the principal; clients cannot supply a
/// different one.
pub async fn insert<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
    principal_cents: i64,
    installment_cents: i64,
    reason: &str,
    loan_date: NaiveDate,
) -> Result<Loan, sqlx::Error> {
    sqlx::query_as::<_, Loan>(
        r#"
        INSERT INTO loans
        (employee_id, principal_cents, remaining_cents, installment_cents, reason, loan_date, status)
        VALUES (?, ?, ?, ?, ?, ?, 'active')
        RETURNING *
        "#,
    )
    .bind(employee_id)
    .bind(principal_cents)
    .bind(principal_cents)
    .bind(installment_cents)
    .bind(reason)
    .bind(loan_date)
    .fetch_one(ex)
    .await
}

pub async fn fetch<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<Option<Loan>, sqlx::Error> {
    sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(ex: E) -> Result<Vec<Loan>, sqlx::Error> {
    sqlx::query_as::<_, Loan>("SELECT * FROM loans ORDER BY id")
        .fetch_all(ex)
        .await
}

pub async fn list_for_employee<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
) -> Result<Vec<Loan>, sqlx::Error> {
    sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE employee_id = ? ORDER BY id")
        .bind(employee_id)
        .fetch_all(ex)
        .await
}

/// Active loans in stable ascending-id order, the order the settlement loop
/// processes them in.
pub async fn active_for_employee<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
) -> Result<Vec<Loan>, sqlx::Error> {
    sqlx::query_as::<_, Loan>(
        "SELECT * FROM loans WHERE employee_id = ? AND status = 'active' ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(ex)
    .await
}

/// Writes the outcome of one settlement step: new balance plus status. The
/// full computation for the loan is done before this single explicit write.
pub async fn apply_settlement<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
    remaining_cents: i64,
    status: LoanStatus,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE loans
        SET remaining_cents = ?, status = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(remaining_cents)
    .bind(status)
    .bind(id)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

/// Updates the repayment terms. The remaining balance is deliberately not
/// touchable from here; only the settlement path may change it.
pub async fn update_terms<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
    installment_cents: i64,
    reason: &str,
    loan_date: NaiveDate,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE loans
        SET installment_cents = ?, reason = ?, loan_date = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(installment_cents)
    .bind(reason)
    .bind(loan_date)
    .bind(id)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM loans WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
