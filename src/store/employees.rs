use chrono::NaiveDate;
use sqlx::SqliteExecutor;

use crate::model::Employee;

pub async fn insert<'e, E: SqliteExecutor<'e>>(
    ex: E,
    name: &str,
    phone: &str,
    start_date: NaiveDate,
) -> Result<Employee, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (name, phone, start_date)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(phone)
    .bind(start_date)
    .fetch_one(ex)
    .await
}

pub async fn fetch<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(ex: E) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id")
        .fetch_all(ex)
        .await
}

pub async fn exists<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<bool, sqlx::Error> {
    let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?)")
        .bind(id)
        .fetch_one(ex)
        .await?;
    Ok(found != 0)
}

/// Cascade-deletes all dependent records (attendance, salaries, loans, ...).
pub async fn delete<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
