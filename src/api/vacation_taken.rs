use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePool;
use utoipa::ToSchema;

use crate::error::Error;
use crate::queries;
use crate::store;
use crate::utils::db_utils::{build_update_sql, execute_update};

const UPDATABLE: &[&str] = &["start_date", "end_date", "days_taken"];

#[derive(Deserialize, ToSchema)]
pub struct CreateVacationTaken {
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2026-03-02", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2026-03-06", value_type = String, format = "date")]
    pub end_date: NaiveDate,

    #[schema(example = 5)]
    pub days_taken: i64,
}

/// Record Vacation Taken
///
/// Advisory only: this does not decrement the employee's vacation balance.
#[utoipa::path(
    post,
    path = "/api/vacations-taken",
    request_body = CreateVacationTaken,
    responses(
        (status = 201, description = "Vacation-taken recorded", body = crate::model::VacationTaken),
        (status = 400, description = "end_date before start_date"),
        (status = 404, description = "Employee not found")
    ),
    tag = "VacationTaken"
)]
pub async fn create_vacation_taken(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateVacationTaken>,
) -> Result<impl Responder, Error> {
    if payload.end_date < payload.start_date {
        return Err(Error::invalid("end_date must not be before start_date"));
    }
    if !store::employees::exists(pool.get_ref(), payload.employee_id).await? {
        return Err(Error::not_found("employee", payload.employee_id));
    }

    let row = store::vacations_taken::insert(
        pool.get_ref(),
        payload.employee_id,
        payload.start_date,
        payload.end_date,
        payload.days_taken,
    )
    .await?;

    Ok(HttpResponse::Created().json(row))
}

/// List Vacations Taken
#[utoipa::path(
    get,
    path = "/api/vacations-taken",
    responses((status = 200, body = [crate::model::VacationTaken])),
    tag = "VacationTaken"
)]
pub async fn list_vacations_taken(pool: web::Data<SqlitePool>) -> Result<impl Responder, Error> {
    let rows = store::vacations_taken::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Vacations Taken for one employee
#[utoipa::path(
    get,
    path = "/api/employees/{id}/vacations-taken",
    params(("id", description = "Employee ID")),
    responses(
        (status = 200, body = [crate::model::VacationTaken]),
        (status = 404, description = "Employee not found")
    ),
    tag = "VacationTaken"
)]
pub async fn vacations_taken_for_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let rows = queries::vacations_taken_for(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Get Vacation Taken by ID
#[utoipa::path(
    get,
    path = "/api/vacations-taken/{id}",
    params(("id", description = "VacationTaken ID")),
    responses(
        (status = 200, body = crate::model::VacationTaken),
        (status = 404, description = "Record not found")
    ),
    tag = "VacationTaken"
)]
pub async fn get_vacation_taken(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let row = store::vacations_taken::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("vacation_taken", id))?;
    Ok(HttpResponse::Ok().json(row))
}

/// Update Vacation Taken (partial)
#[utoipa::path(
    put,
    path = "/api/vacations-taken/{id}",
    params(("id", description = "VacationTaken ID")),
    responses(
        (status = 200, description = "Record updated"),
        (status = 404, description = "Record not found")
    ),
    tag = "VacationTaken"
)]
pub async fn update_vacation_taken(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let update = build_update_sql("vacations_taken", &body, UPDATABLE, "id", id)?;
    let affected = execute_update(pool.get_ref(), update)
        .await
        .map_err(Error::from)?;

    if affected == 0 {
        return Err(Error::not_found("vacation_taken", id).into());
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Vacation taken updated successfully" })))
}

/// Delete Vacation Taken
#[utoipa::path(
    delete,
    path = "/api/vacations-taken/{id}",
    params(("id", description = "VacationTaken ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Record not found")
    ),
    tag = "VacationTaken"
)]
pub async fn delete_vacation_taken(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let affected = store::vacations_taken::delete(pool.get_ref(), id).await?;

    if affected == 0 {
        return Err(Error::not_found("vacation_taken", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
