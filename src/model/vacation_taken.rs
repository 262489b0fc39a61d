use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vacation consumed over a date range. Advisory only: creating one does not
/// decrement the employee's `Vacation` balance.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct VacationTaken {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2026-03-02", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2026-03-06", value_type = String, format = "date")]
    pub end_date: NaiveDate,

    #[schema(example = 5)]
    pub days_taken: i64,
}
