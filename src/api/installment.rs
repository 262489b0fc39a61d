use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use sqlx::sqlite::SqlitePool;
use utoipa::ToSchema;

use crate::error::Error;
use crate::model::LoanStatus;
use crate::payroll;
use crate::queries;
use crate::store;

#[derive(Deserialize, ToSchema)]
pub struct CreateInstallment {
    #[schema(example = 1)]
    pub loan_id: i64,

    #[schema(example = "100.00", value_type = String)]
    pub amount: Decimal,

    #[schema(example = "2026-01-12", value_type = String, format = "date")]
    pub date: NaiveDate,
}

/// Record a manual Installment (abono) against a loan
///
/// Applies the same settlement rules as the payroll engine: the amount is
/// clamped to the remaining balance and the loan settles at zero. The loan
/// update and the installment insert are one transaction.
#[utoipa::path(
    post,
    path = "/api/installments",
    request_body = CreateInstallment,
    responses(
        (status = 201, description = "Installment recorded", body = crate::model::Installment),
        (status = 400, description = "Invalid amount or loan already settled"),
        (status = 404, description = "Loan not found")
    ),
    tag = "Installment"
)]
pub async fn create_installment(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateInstallment>,
) -> Result<impl Responder, Error> {
    if payload.amount <= Decimal::ZERO {
        return Err(Error::invalid("amount must be positive"));
    }

    let mut tx = pool.begin().await?;

    let loan = store::loans::fetch(&mut *tx, payload.loan_id)
        .await?
        .ok_or(Error::not_found("loan", payload.loan_id))?;
    if loan.status == LoanStatus::Settled {
        return Err(Error::invalid(format!(
            "loan {} is already settled",
            loan.id
        )));
    }

    let installment = payroll::apply_to_loan(&mut tx, &loan, payload.amount, payload.date).await?;

    tx.commit().await?;

    Ok(HttpResponse::Created().json(installment))
}

/// List Installments
#[utoipa::path(
    get,
    path = "/api/installments",
    responses((status = 200, body = [crate::model::Installment])),
    tag = "Installment"
)]
pub async fn list_installments(pool: web::Data<SqlitePool>) -> Result<impl Responder, Error> {
    let rows = store::installments::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Installments for one employee
#[utoipa::path(
    get,
    path = "/api/employees/{id}/installments",
    params(("id", description = "Employee ID")),
    responses(
        (status = 200, body = [crate::model::Installment]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Installment"
)]
pub async fn installments_for_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let rows = queries::installments_for(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Get Installment by ID
#[utoipa::path(
    get,
    path = "/api/installments/{id}",
    params(("id", description = "Installment ID")),
    responses(
        (status = 200, body = crate::model::Installment),
        (status = 404, description = "Installment not found")
    ),
    tag = "Installment"
)]
pub async fn get_installment(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let row = store::installments::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("installment", id))?;
    Ok(HttpResponse::Ok().json(row))
}

/// Delete Installment
///
/// Removes the record only; the loan balance is not restored.
#[utoipa::path(
    delete,
    path = "/api/installments/{id}",
    params(("id", description = "Installment ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Installment not found")
    ),
    tag = "Installment"
)]
pub async fn delete_installment(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let affected = store::installments::delete(pool.get_ref(), id).await?;

    if affected == 0 {
        return Err(Error::not_found("installment", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
