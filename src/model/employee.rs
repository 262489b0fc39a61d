use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Juan Pérez",
        "phone": "555-0134",
        "start_date": "2023-04-17"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Juan Pérez")]
    pub name: String,

    #[schema(example = "555-0134")]
    pub phone: String,

    #[schema(example = "2023-04-17", value_type = String, format = "date")]
    pub start_date: NaiveDate,
}
