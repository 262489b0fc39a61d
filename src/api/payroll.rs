use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use utoipa::ToSchema;

use crate::error::Error;
use crate::payroll::{PayrollLocks, run_payroll_cycle};

#[derive(Deserialize, ToSchema)]
pub struct RunPayroll {
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2026-01-14", value_type = String, format = "date")]
    pub pay_date: NaiveDate,
}

/// Run one payroll cycle
///
/// Computes the attendance deduction and loan installments for the employee,
/// updates loan balances and persists the payment with its breakdown, all in
/// one transaction. Not idempotent: each call produces a new payment.
#[utoipa::path(
    post,
    path = "/api/payroll/run",
    request_body = RunPayroll,
    responses(
        (status = 201, description = "Payment created", body = crate::model::Payment),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "A cycle for this employee is already running"),
        (status = 422, description = "Employee has no salary configured")
    ),
    tag = "Payroll"
)]
pub async fn run_payroll(
    pool: web::Data<SqlitePool>,
    locks: web::Data<PayrollLocks>,
    payload: web::Json<RunPayroll>,
) -> Result<impl Responder, Error> {
    let payment = run_payroll_cycle(
        pool.get_ref(),
        locks.get_ref(),
        payload.employee_id,
        payload.pay_date,
    )
    .await?;

    Ok(HttpResponse::Created().json(payment))
}
