use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePool;
use utoipa::ToSchema;

use crate::error::Error;
use crate::store;
use crate::utils::db_utils::{build_update_sql, execute_update};

const UPDATABLE: &[&str] = &["days_remaining"];

#[derive(Deserialize, ToSchema)]
pub struct CreateVacation {
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = 12)]
    pub days_remaining: i64,
}

/// Create Vacation balance
#[utoipa::path(
    post,
    path = "/api/vacations",
    request_body = CreateVacation,
    responses(
        (status = 201, description = "Vacation balance created", body = crate::model::Vacation),
        (status = 404, description = "Employee not found")
    ),
    tag = "Vacation"
)]
pub async fn create_vacation(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateVacation>,
) -> Result<impl Responder, Error> {
    if !store::employees::exists(pool.get_ref(), payload.employee_id).await? {
        return Err(Error::not_found("employee", payload.employee_id));
    }

    let vacation =
        store::vacations::insert(pool.get_ref(), payload.employee_id, payload.days_remaining)
            .await?;
    Ok(HttpResponse::Created().json(vacation))
}

/// List Vacation balances
#[utoipa::path(
    get,
    path = "/api/vacations",
    responses((status = 200, body = [crate::model::Vacation])),
    tag = "Vacation"
)]
pub async fn list_vacations(pool: web::Data<SqlitePool>) -> Result<impl Responder, Error> {
    let vacations = store::vacations::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(vacations))
}

/// Get Vacation balance by ID
#[utoipa::path(
    get,
    path = "/api/vacations/{id}",
    params(("id", description = "Vacation ID")),
    responses(
        (status = 200, body = crate::model::Vacation),
        (status = 404, description = "Vacation not found")
    ),
    tag = "Vacation"
)]
pub async fn get_vacation(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let vacation = store::vacations::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("vacation", id))?;
    Ok(HttpResponse::Ok().json(vacation))
}

/// Update Vacation balance (partial)
#[utoipa::path(
    put,
    path = "/api/vacations/{id}",
    params(("id", description = "Vacation ID")),
    responses(
        (status = 200, description = "Vacation updated"),
        (status = 404, description = "Vacation not found")
    ),
    tag = "Vacation"
)]
pub async fn update_vacation(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let update = build_update_sql("vacations", &body, UPDATABLE, "id", id)?;
    let affected = execute_update(pool.get_ref(), update)
        .await
        .map_err(Error::from)?;

    if affected == 0 {
        return Err(Error::not_found("vacation", id).into());
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Vacation updated successfully" })))
}

/// Delete Vacation balance
#[utoipa::path(
    delete,
    path = "/api/vacations/{id}",
    params(("id", description = "Vacation ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Vacation not found")
    ),
    tag = "Vacation"
)]
pub async fn delete_vacation(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let affected = store::vacations::delete(pool.get_ref(), id).await?;

    if affected == 0 {
        return Err(Error::not_found("vacation", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
