use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::money::from_cents;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Settled,
}

/// An advance to an employee, repaid via fixed weekly installments.
///
/// `remaining_balance` is initialized to the principal exactly once, at
/// creation, and thereafter only decreases through installment settlement.
/// It is clamped at zero; the status flips to `settled` at that point and the
/// loan is never selected for deduction again.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Loan {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "300.00", value_type = String)]
    pub principal: Decimal,

    #[schema(example = "300.00", value_type = String)]
    pub remaining_balance: Decimal,

    #[schema(example = "100.00", value_type = String)]
    pub weekly_installment: Decimal,

    #[schema(example = "medical expenses")]
    pub reason: String,

    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub loan_date: NaiveDate,

    pub status: LoanStatus,
}

impl sqlx::FromRow<'_, SqliteRow> for Loan {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            principal: from_cents(row.try_get("principal_cents")?),
            remaining_balance: from_cents(row.try_get("remaining_cents")?),
            weekly_installment: from_cents(row.try_get("installment_cents")?),
            reason: row.try_get("reason")?,
            loan_date: row.try_get("loan_date")?,
            status: row.try_get("status")?,
        })
    }
}
