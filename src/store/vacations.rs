use sqlx::SqliteExecutor;

use crate::model::Vacation;

pub async fn insert<'e, E: SqliteExecutor<'e>>(
    ex: E,
    employee_id: i64,
    days_remaining: i64,
) -> Result<Vacation, sqlx::Error> {
    sqlx::query_as::<_, Vacation>(
        r#"
        INSERT INTO vacations (employee_id, days_remaining)
        VALUES (?, ?)
        RETURNING *
        "#,
    )
    .bind(employee_id)
    .bind(days_remaining)
    .fetch_one(ex)
    .await
}

pub async fn fetch<'e, E: SqliteExecutor<'e>>(
    ex: E,
    id: i64,
) -> Result<Option<Vacation>, sqlx::Error> {
    sqlx::query_as::<_, Vacation>("SELECT * FROM vacations WHERE id = ?")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list<'e, E: SqliteExecutor<'e>>(ex: E) -> Result<Vec<Vacation>, sqlx::Error> {
    sqlx::query_as::<_, Vacation>("SELECT * FROM vacations ORDER BY id")
        .fetch_all(ex)
        .await
}

pub async fn delete<'e, E: SqliteExecutor<'e>>(ex: E, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM vacations WHERE id = ?")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
