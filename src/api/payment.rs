use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use sqlx::sqlite::SqlitePool;

use crate::error::Error;
use crate::queries;
use crate::store;

// Payments are created by the payroll engine only (POST /api/payroll/run);
// the breakdown is write-once, so there is no create or update here.

/// List Payments
#[utoipa::path(
    get,
    path = "/api/payments",
    responses((status = 200, body = [crate::model::Payment])),
    tag = "Payment"
)]
pub async fn list_payments(pool: web::Data<SqlitePool>) -> Result<impl Responder, Error> {
    let payments = store::payments::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(payments))
}

/// Payments on a specific date
#[utoipa::path(
    get,
    path = "/api/payments/by-date/{date}",
    params(("date", description = "Calendar date, YYYY-MM-DD")),
    responses(
        (status = 200, body = [crate::model::Payment]),
        (status = 400, description = "Malformed date")
    ),
    tag = "Payment"
)]
pub async fn payments_by_date(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    let date = queries::parse_date(&path.into_inner())?;
    let payments = store::payments::list_on_date(pool.get_ref(), date).await?;
    Ok(HttpResponse::Ok().json(payments))
}

/// Payments for one employee
#[utoipa::path(
    get,
    path = "/api/employees/{id}/payments",
    params(("id", description = "Employee ID")),
    responses(
        (status = 200, body = [crate::model::Payment]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Payment"
)]
pub async fn payments_for_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let payments = queries::payments_for(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(payments))
}

/// Get Payment by ID
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    params(("id", description = "Payment ID")),
    responses(
        (status = 200, body = crate::model::Payment),
        (status = 404, description = "Payment not found")
    ),
    tag = "Payment"
)]
pub async fn get_payment(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let payment = store::payments::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("payment", id))?;
    Ok(HttpResponse::Ok().json(payment))
}

/// Delete Payment
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    params(("id", description = "Payment ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Payment not found")
    ),
    tag = "Payment"
)]
pub async fn delete_payment(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let affected = store::payments::delete(pool.get_ref(), id).await?;

    if affected == 0 {
        return Err(Error::not_found("payment", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
