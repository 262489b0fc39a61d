use chrono::NaiveDate;
use sqlx::SqliteExecutor;

use crate::model::Payment;

/// The breakdown is write-once: it is inserted here and there is no update
/// path for it anywhere in the store.
pub async fn insert<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
    amount_cents: i64,
    pay_date: NaiveDate,
    breakdown_json: &str,
) -> Result<Payment, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments (employee_id, amount_cents, pay_date, breakdown)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(employee_id)
    .bind(amount_cents)
    .bind(pay_date)
    .bind(breakdown_json)
    .fetch_one(ex)
    .await
}

pub async fn fetch<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(ex: E) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY id")
        .fetch_all(ex)
        .await
}

pub async fn list_for_employee<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE employee_id = ? ORDER BY id")
        .bind(employee_id)
        .fetch_all(ex)
        .await
}

pub async fn list_on_date<'e, E: SqliteExecutor<'e>>(
    ex: E,
    pay_date: NaiveDate,
) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE pay_date = ? ORDER BY id")
        .bind(pay_date)
        .fetch_all(ex)
        .await
}

pub async fn delete<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM payments WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
