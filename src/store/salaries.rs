use sqlx::SqliteExecutor;

use crate::model::Salary;

pub async fn insert<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
    weekly_cents: i64,
) -> Result<Salary, sqlx::Error> {
    sqlx::query_as::<_, Salary>(
        r#"
        INSERT INTO salaries (employee_id, weekly_cents)
        VALUES (?, ?)
        RETURNING *
        "#,
    )
    .bind(employee_id)
    .bind(weekly_cents)
    .fetch_one(ex)
    .await
}

pub async fn fetch<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
) -> Result<Option<Salary>, sqlx::Error> {
    sqlx::query_as::<_, Salary>("SELECT * FROM salaries WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(ex: E) -> Result<Vec<Salary>, sqlx::Error> {
    sqlx::query_as::<_, Salary>("SELECT * FROM salaries ORDER BY id")
        .fetch_all(ex)
        .await
}

/// The employee's current salary: latest created row, ties broken by
/// highest id (creation-timestamp collisions are possible at second
/// resolution).
pub async fn current_for_employee<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
) -> Result<Option<Salary>, sqlx::Error> {
    sqlx::query_as::<_, Salary>(
        r#"
        SELECT * FROM salaries
        WHERE employee_id = ?
        ORDER BY created_at DESC, id DESC
        LIMIT 1
        "#,
    )
    .bind(employee_id)
    .fetch_optional(ex)
    .await
}

pub async fn update_amount<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
    weekly_cents: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE salaries SET weekly_cents = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(weekly_cents)
    .bind(id)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM salaries WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
