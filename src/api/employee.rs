use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePool;
use utoipa::ToSchema;

use crate::error::Error;
use crate::store;
use crate::utils::db_utils::{build_update_sql, execute_update};

const UPDATABLE: &[&str] = &["name", "phone", "start_date"];

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Juan Pérez")]
    pub name: String,

    #[schema(example = "555-0134")]
    pub phone: String,

    #[schema(example = "2023-04-17", value_type = String, format = "date")]
    pub start_date: NaiveDate,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = crate::model::Employee),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder, Error> {
    let employee = store::employees::insert(
        pool.get_ref(),
        &payload.name,
        &payload.phone,
        payload.start_date,
    )
    .await?;

    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees in id order", body = [crate::model::Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<impl Responder, Error> {
    let employees = store::employees::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id", description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = crate::model::Employee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let employee = store::employees::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("employee", id))?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Update Employee (partial)
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id", description = "Employee ID")),
    responses(
        (status = 200, description = "Employee updated"),
        (status = 400, description = "Unknown field or bad payload"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let update = build_update_sql("employees", &body, UPDATABLE, "id", id)?;
    let affected = execute_update(pool.get_ref(), update)
        .await
        .map_err(Error::from)?;

    if affected == 0 {
        return Err(Error::not_found("employee", id).into());
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Employee updated successfully" })))
}

/// Delete Employee (cascades to all dependent records)
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id", description = "Employee ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let affected = store::employees::delete(pool.get_ref(), id).await?;

    if affected == 0 {
        return Err(Error::not_found("employee", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
