use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use utoipa::ToSchema;

use crate::money::from_cents;

/// A weekly base wage, versioned by creation time. Historical rows are kept;
/// the current salary is the most recently created one (ties broken by
/// highest id).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Salary {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "700.00", value_type = String)]
    pub weekly_amount: Decimal,
}

impl sqlx::FromRow<'_, SqliteRow> for Salary {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            weekly_amount: from_cents(row.try_get("weekly_cents")?),
        })
    }
}
