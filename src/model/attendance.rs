use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One presence flag per (employee, date). The schema allows multiple rows
/// for the same day; callers must not assume at-most-one-per-day.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2026-01-12", value_type = String, format = "date")]
    pub date: NaiveDate,

    /// false = falta (absence)
    #[schema(example = true)]
    pub present: bool,
}
