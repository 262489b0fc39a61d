use actix_web::{HttpResponse, Responder, web};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use sqlx::sqlite::SqlitePool;
use utoipa::ToSchema;

use crate::error::Error;
use crate::money::to_cents;
use crate::store;

#[derive(Deserialize, ToSchema)]
pub struct CreateSalary {
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "700.00", value_type = String)]
    pub weekly_amount: Decimal,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateSalary {
    #[schema(example = "750.00", value_type = String)]
    pub weekly_amount: Decimal,
}

/// Create Salary
///
/// Salaries are versioned: creating a new row makes it the current one
/// without overwriting history.
#[utoipa::path(
    post,
    path = "/api/salaries",
    request_body = CreateSalary,
    responses(
        (status = 201, description = "Salary created", body = crate::model::Salary),
        (status = 400, description = "Invalid amount"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Salary"
)]
pub async fn create_salary(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateSalary>,
) -> Result<impl Responder, Error> {
    if payload.weekly_amount <= Decimal::ZERO {
        return Err(Error::invalid("weekly_amount must be positive"));
    }
    if !store::employees::exists(pool.get_ref(), payload.employee_id).await? {
        return Err(Error::not_found("employee", payload.employee_id));
    }

    let cents = to_cents(payload.weekly_amount)?;
    let salary = store::salaries::insert(pool.get_ref(), payload.employee_id, cents).await?;
    Ok(HttpResponse::Created().json(salary))
}

/// List Salaries
#[utoipa::path(
    get,
    path = "/api/salaries",
    responses((status = 200, body = [crate::model::Salary])),
    tag = "Salary"
)]
pub async fn list_salaries(pool: web::Data<SqlitePool>) -> Result<impl Responder, Error> {
    let salaries = store::salaries::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(salaries))
}

/// Get Salary by ID
#[utoipa::path(
    get,
    path = "/api/salaries/{id}",
    params(("id", description = "Salary ID")),
    responses(
        (status = 200, body = crate::model::Salary),
        (status = 404, description = "Salary not found")
    ),
    tag = "Salary"
)]
pub async fn get_salary(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let salary = store::salaries::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("salary", id))?;
    Ok(HttpResponse::Ok().json(salary))
}

/// Update Salary amount
#[utoipa::path(
    put,
    path = "/api/salaries/{id}",
    params(("id", description = "Salary ID")),
    request_body = UpdateSalary,
    responses(
        (status = 200, description = "Salary updated"),
        (status = 400, description = "Invalid amount"),
        (status = 404, description = "Salary not found")
    ),
    tag = "Salary"
)]
pub async fn update_salary(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<UpdateSalary>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();

    if body.weekly_amount <= Decimal::ZERO {
        return Err(Error::invalid("weekly_amount must be positive"));
    }

    let cents = to_cents(body.weekly_amount)?;
    let affected = store::salaries::update_amount(pool.get_ref(), id, cents).await?;

    if affected == 0 {
        return Err(Error::not_found("salary", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Salary updated successfully" })))
}

/// Delete Salary
#[utoipa::path(
    delete,
    path = "/api/salaries/{id}",
    params(("id", description = "Salary ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Salary not found")
    ),
    tag = "Salary"
)]
pub async fn delete_salary(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let affected = store::salaries::delete(pool.get_ref(), id).await?;

    if affected == 0 {
        return Err(Error::not_found("salary", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
