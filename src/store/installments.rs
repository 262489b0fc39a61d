use chrono::NaiveDate;
use sqlx::SqliteExecutor;

use crate::model::Installment;

pub async fn insert<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
    loan_id: i64,
    amount_cents: i64,
    date: NaiveDate,
    remaining_after_cents: i64,
) -> Result<Installment, sqlx::Error> {
    sqlx::query_as::<_, Installment>(
        r#"
        INSERT INTO installments (employee_id, loan_id, amount_cents, date, remaining_after_cents)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(employee_id)
    .bind(loan_id)
    .bind(amount_cents)
    .bind(date)
    .bind(remaining_after_cents)
    .fetch_one(ex)
    .await
}

pub async fn fetch<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
) -> Result<Option<Installment>, sqlx::Error> {
    sqlx::query_as::<_, Installment>("SELECT * FROM installments WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(ex: E) -> Result<Vec<Installment>, sqlx::Error> {
    sqlx::query_as::<_, Installment>("SELECT * FROM installments ORDER BY id")
        .fetch_all(ex)
        .await
}

pub async fn list_for_employee<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
) -> Result<Vec<Installment>, sqlx::Error> {
    sqlx::query_as::<_, Installment>(
        "SELECT * FROM installments WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(ex)
    .await
}

pub async fn list_for_loan<'e, E: SqliteExecutor<'e>>(
    ex: E,
    loan_id: i64,
) -> Result<Vec<Installment>, sqlx::Error> {
    sqlx::query_as::<_, Installment>("SELECT * FROM installments WHERE loan_id = ? ORDER BY id")
        .bind(loan_id)
        .fetch_all(ex)
        .await
}

pub async fn delete<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM installments WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
