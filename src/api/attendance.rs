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

const UPDATABLE: &[&str] = &["date", "present"];

#[derive(Deserialize, ToSchema)]
pub struct CreateAttendance {
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2026-01-12", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = true)]
    pub present: bool,
}

/// Record Attendance
///
/// Multiple rows for the same (employee, date) are accepted.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = crate::model::Attendance),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn create_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAttendance>,
) -> Result<impl Responder, Error> {
    if !store::employees::exists(pool.get_ref(), payload.employee_id).await? {
        return Err(Error::not_found("employee", payload.employee_id));
    }

    let row = store::attendance::insert(
        pool.get_ref(),
        payload.employee_id,
        payload.date,
        payload.present,
    )
    .await?;

    Ok(HttpResponse::Created().json(row))
}

/// List Attendance
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses((status = 200, body = [crate::model::Attendance])),
    tag = "Attendance"
)]
pub async fn list_attendance(pool: web::Data<SqlitePool>) -> Result<impl Responder, Error> {
    let rows = store::attendance::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Attendance on a specific date
#[utoipa::path(
    get,
    path = "/api/attendance/by-date/{date}",
    params(("date", description = "Calendar date, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Attendance rows for the date, id order", body = [crate::model::Attendance]),
        (status = 400, description = "Malformed date")
    ),
    tag = "Attendance"
)]
pub async fn attendance_by_date(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    let rows = queries::attendance_on_date(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Get Attendance by ID
#[utoipa::path(
    get,
    path = "/api/attendance/{id}",
    params(("id", description = "Attendance ID")),
    responses(
        (status = 200, body = crate::model::Attendance),
        (status = 404, description = "Attendance not found")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let row = store::attendance::fetch(pool.get_ref(), id)
        .await?
        .ok_or(Error::not_found("attendance", id))?;
    Ok(HttpResponse::Ok().json(row))
}

/// Update Attendance (partial)
#[utoipa::path(
    put,
    path = "/api/attendance/{id}",
    params(("id", description = "Attendance ID")),
    responses(
        (status = 200, description = "Attendance updated"),
        (status = 404, description = "Attendance not found")
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let update = build_update_sql("attendance", &body, UPDATABLE, "id", id)?;
    let affected = execute_update(pool.get_ref(), update)
        .await
        .map_err(Error::from)?;

    if affected == 0 {
        return Err(Error::not_found("attendance", id).into());
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Attendance updated successfully" })))
}

/// Delete Attendance
#[utoipa::path(
    delete,
    path = "/api/attendance/{id}",
    params(("id", description = "Attendance ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Attendance not found")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let id = path.into_inner();
    let affected = store::attendance::delete(pool.get_ref(), id).await?;

    if affected == 0 {
        return Err(Error::not_found("attendance", id));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
