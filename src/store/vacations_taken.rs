use chrono::NaiveDate;
use sqlx::SqliteExecutor;

use crate::model::VacationTaken;

pub async fn insert<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days_taken: i64,
) -> Result<VacationTaken, sqlx::Error> {
    sqlx::query_as::<_, VacationTaken>(
        r#"
        INSERT INTO vacations_taken (employee_id, start_date, end_date, days_taken)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(employee_id)
    .bind(start_date)
    .bind(end_date)
    .bind(days_taken)
    .fetch_one(ex)
    .await
}

pub async fn fetch<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
) -> Result<Option<VacationTaken>, sqlx::Error> {
    sqlx::query_as::<_, VacationTaken>("SELECT * FROM vacations_taken WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(ex: E) -> Result<Vec<VacationTaken>, sqlx::Error> {
    sqlx::query_as::<_, VacationTaken>("SELECT * FROM vacations_taken ORDER BY id")
        .fetch_all(ex)
        .await
}

pub async fn list_for_employee<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
) -> Result<Vec<VacationTaken>, sqlx::Error> {
    sqlx::query_as::<_, VacationTaken>(
        "SELECT * FROM vacations_taken WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(ex)
    .await
}

pub async fn delete<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM vacations_taken WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
