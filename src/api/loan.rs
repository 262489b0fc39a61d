use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use sqlx::sqlite::SqlitePool;
use utoipa::ToSchema;

use crate::error::Error;
use crate::money::to_cents;
use crate::queries;
use crate::store;

#[derive(Deserialize, ToSchema)]
pub struct CreateLoan {
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "300.00", value_type = String)]
    pub principal: Decimal,

    #[schema(example = "100.00", value_type = String)]
    pub weekly_installment: Decimal,

    #[schema(example = "medical expenses")]
    pub reason: String,

    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub loan_date: NaiveDate,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateLoanTerms {
    #[schema(example = "75.00", value_type = String)]
    pub weekly_installment: Option<Decimal>,

    #[schema(example = "updated reason")]
    pub reason: Option<String>,

    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub loan_date: Option<NaiveDate>,
}

/// Create Loan
///
/// The remaining balance starts at the principal; only the payroll engine
/// (or a manual installment) can decrease it afterwards.
#[utoipa::path(
    post,
    path = "/api/loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = crate::model::Loan),
        (status = 400, description = "Invalid amounts"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Loan"
)]
pub async fn create_loan(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateLoan>,
) -> Result<impl Responder, Error> {
    if payload.principal <= Decimal::ZERO {
        return Err(Error::invalid("principal must be positive"));
    }
    if payload.weekly_installment <= Decimal::ZERO {
        return Err(Error::invalid("weekly_installment must be positive"));
    }
    if !store::employees::exists(pool.get_ref(), payload.employee_id).await? {
        return Err(Error::not_found("employee", payload.employee_id));
    }

    let loan = store::loans::insert(
        pool.get_ref(),
        payload.employee_id,
        to_cents(payload.principal)?,
        to_cents(payload.weekly_installment)?,
        &payload.reason,
        payload.loan_date,
    )
    .await?;

    Ok(HttpResponse::Created().json(loan))
}

/// List Loans
#[utoipa::path(
    get,
    path = "/api/loans",
    responses((status = 200, body = [crate::model::Loan])),
    tag = "Loan"
)]
pub async fn list_loans(pool: web::Data<SqlitePool>) -> Result<impl Responder, Error> {
    let loans = store::loans::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(loans))
}

/// Loans for one employee
#[utoipa::path(
    get,
    path = "/api/employees/{id}/loans",
    params(("id", description = "Employee ID")),
    responses(
        (status = 200, body = [crate::model::Loan]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Loan"
)]
pub async fn loans_for_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let loans = queries::loans_for(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(loans))
}

/// Get Loan by ID
#[utoipa::path(
    get,
    path = "/api/loans/{id}",
    params(("id", description = "Loan ID")),
    responses(
        (status = 200, body = crate::model::Loan),
        (status = 404, description = "Loan not found")
    ),
    tag = "Loan"
)]
pub async fn get_loan(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let loan = store::loans::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("loan", id))?;
    Ok(HttpResponse::Ok().json(loan))
}

/// Update Loan terms
///
/// The remaining balance and status are not updatable here; they change only
/// through settlement.
#[utoipa::path(
    put,
    path = "/api/loans/{id}",
    params(("id", description = "Loan ID")),
    request_body = UpdateLoanTerms,
    responses(
        (status = 200, description = "Loan updated"),
        (status = 400, description = "Invalid amounts"),
        (status = 404, description = "Loan not found")
    ),
    tag = "Loan"
)]
pub async fn update_loan(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<UpdateLoanTerms>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();

    let current = store::loans::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("loan", id))?;

    let weekly_installment = body.weekly_installment.unwrap_or(current.weekly_installment);
    if weekly_installment <= Decimal::ZERO {
        return Err(Error::invalid("weekly_installment must be positive"));
    }
    let reason = body.reason.clone().unwrap_or(current.reason);
    let loan_date = body.loan_date.unwrap_or(current.loan_date);

    store::loans::update_terms(
        pool.get_ref(),
        id,
        to_cents(weekly_installment)?,
        &reason,
        loan_date,
    )
    .await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Loan updated successfully" })))
}

/// Delete Loan (cascades to its installments)
#[utoipa::path(
    delete,
    path = "/api/loans/{id}",
    params(("id", description = "Loan ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Loan not found")
    ),
    tag = "Loan"
)]
pub async fn delete_loan(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let affected = store::loans::delete(pool.get_ref(), id).await?;

    if affected == 0 {
        return Err(Error::not_found("loan", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
