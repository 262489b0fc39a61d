use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use utoipa::ToSchema;

use crate::money::from_cents;

/// An immutable record of one settlement event against exactly one loan.
/// `remaining_after` is a point-in-time snapshot of the loan balance after
/// this installment was applied, not a live reference.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Installment {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = 1)]
    pub loan_id: i64,

    #[schema(example = "100.00", value_type = String)]
    pub amount: Decimal,

    #[schema(example = "2026-01-12", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "200.00", value_type = String)]
    pub remaining_after: Decimal,
}

impl sqlx::FromRow<'_, SqliteRow> for Installment {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            loan_id: row.try_get("loan_id")?,
            amount: from_cents(row.try_get("amount_cents")?),
            date: row.try_get("date")?,
            remaining_after: from_cents(row.try_get("remaining_after_cents")?),
        })
    }
}
