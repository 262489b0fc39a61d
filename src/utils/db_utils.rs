use actix_web::error::ErrorBadRequest;
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::sqlite::SqlitePool;

/// SQL bindable value enum
#[derive(Debug)]
pub enum SqlValue {
    String(String),
    I64(i64),
    Bool(bool),
    Date(NaiveDate),
    Null,
}

/// SQL update container
#[derive(Debug)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// Builds a dynamic UPDATE from a partial JSON object. Only columns named in
/// `allowed` are accepted; anything else is a bad request (column names are
/// interpolated into the SQL, so the whitelist is mandatory).
pub fn build_update_sql(
    table: &str,
    payload: &Value,
    allowed: &[&str],
    id_column: &str,
    id_value: i64,
) -> Result<SqlUpdate, actix_web::Error> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ErrorBadRequest("Payload must be a JSON object"))?;

    if obj.is_empty() {
        return Err(ErrorBadRequest("No fields provided for update"));
    }

    for key in obj.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(ErrorBadRequest(format!("Unknown field '{key}'")));
        }
    }

    // Build SET clause
    let set_clause = obj
        .keys()
        .map(|k| format!("{} = ?", k))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "UPDATE {} SET {}, updated_at = CURRENT_TIMESTAMP WHERE {} = ?",
        table, set_clause, id_column
    );

    let mut values = Vec::with_capacity(obj.len() + 1);

    // Convert JSON values -> SqlValue
    for value in obj.values() {
        match value {
            Value::String(s) => {
                if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                    values.push(SqlValue::Date(d));
                } else {
                    values.push(SqlValue::String(s.clone()));
                }
            }
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    values.push(SqlValue::I64(i));
                } else {
                    return Err(ErrorBadRequest("Non-integer numbers are not accepted"));
                }
            }
            Value::Bool(b) => values.push(SqlValue::Bool(*b)),
            Value::Null => values.push(SqlValue::Null),
            _ => return Err(ErrorBadRequest("Unsupported JSON value type")),
        }
    }

    // WHERE id = ?
    values.push(SqlValue::I64(id_value));

    Ok(SqlUpdate { sql, values })
}

/// Execute the update
pub async fn execute_update(pool: &SqlitePool, update: SqlUpdate) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::I64(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
            SqlValue::Date(v) => query.bind(v),
            SqlValue::Null => query.bind(None::<String>),
        };
    }

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_update_with_whitelisted_columns() {
        let payload = json!({ "name": "Ana", "start_date": "2024-05-06" });
        let update =
            build_update_sql("employees", &payload, &["name", "phone", "start_date"], "id", 3)
                .unwrap();

        assert!(update.sql.starts_with("UPDATE employees SET "));
        assert!(update.sql.contains("name = ?"));
        assert!(update.sql.contains("start_date = ?"));
        assert!(update.sql.ends_with("WHERE id = ?"));
        assert_eq!(update.values.len(), 3);
        assert!(matches!(update.values[2], SqlValue::I64(3)));
    }

    #[test]
    fn rejects_unknown_columns() {
        let payload = json!({ "name": "Ana", "salary": 1 });
        let result = build_update_sql("employees", &payload, &["name"], "id", 3);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_and_non_object_payloads() {
        assert!(build_update_sql("employees", &json!({}), &["name"], "id", 1).is_err());
        assert!(build_update_sql("employees", &json!([1, 2]), &["name"], "id", 1).is_err());
    }

    #[test]
    fn parses_iso_dates_into_date_binds() {
        let payload = json!({ "date": "2026-01-12", "present": false });
        let update =
            build_update_sql("attendance", &payload, &["date", "present"], "id", 9).unwrap();
        assert!(matches!(update.values[0], SqlValue::Date(_)));
        assert!(matches!(update.values[1], SqlValue::Bool(false)));
    }
}
