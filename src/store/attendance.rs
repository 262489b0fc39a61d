use chrono::NaiveDate;
use sqlx::SqliteExecutor;

use crate::model::Attendance;

pub async fn insert<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
    date: NaiveDate,
    present: bool,
) -> Result<Attendance, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"
        INSERT INTO attendance (employee_id, date, present)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(employee_id)
    .bind(date)
    .bind(present)
    .fetch_one(ex)
    .await
}

pub async fn fetch<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
) -> Result<Option<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(ex: E) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance ORDER BY id")
        .fetch_all(ex)
        .await
}

pub async fn list_on_date<'e, E: SqliteExecutor<'e>>(
    ex: E,
    date: NaiveDate,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE date = ? ORDER BY id")
        .bind(date)
        .fetch_all(ex)
        .await
}

/// All absence rows (present = false) for one employee in an inclusive date
/// range. Duplicate same-day rows are returned as-is.
pub async fn list_absences_between<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"
        SELECT * FROM attendance
        WHERE employee_id = ? AND date BETWEEN ? AND ? AND present = 0
        ORDER BY id
        "#,
    )
    .bind(employee_id)
    .bind(start)
    .bind(end)
    .fetch_all(ex)
    .await
}

pub async fn delete<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendance WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
