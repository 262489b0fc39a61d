use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use nomina::config::Config;
use nomina::db;
use nomina::payroll::PayrollLocks;
use nomina::routes;

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        api_prefix: "/api".to_string(),
    }
}

macro_rules! spawn_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new(PayrollLocks::new()))
                .configure(|cfg| routes::configure(cfg, test_config())),
        )
        .await
    };
}

async fn post_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    path: &str,
    body: Value,
) -> actix_web::dev::ServiceResponse {
    let req = test::TestRequest::post()
        .uri(path)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

async fn get(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    path: &str,
) -> actix_web::dev::ServiceResponse {
    test::call_service(app, test::TestRequest::get().uri(path).to_request()).await
}

#[actix_web::test]
async fn employee_crud_roundtrip() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    let resp = post_json(
        &app,
        "/api/employees",
        json!({ "name": "Juan Pérez", "phone": "555-0134", "start_date": "2023-04-17" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Juan Pérez");

    let resp = get(&app, "/api/employees").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let req = test::TestRequest::put()
        .uri("/api/employees/1")
        .set_json(json!({ "phone": "555-0199" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(&app, "/api/employees/1").await;
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["phone"], "555-0199");
    assert_eq!(updated["name"], "Juan Pérez");

    let req = test::TestRequest::delete()
        .uri("/api/employees/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(&app, "/api/employees/1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unknown_employee_is_reported_with_error_body() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    let resp = get(&app, "/api/employees/42").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("42"));
}

#[actix_web::test]
async fn update_with_unknown_field_is_rejected() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    post_json(
        &app,
        "/api/employees",
        json!({ "name": "Ana", "phone": "555-0100", "start_date": "2024-01-02" }),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/employees/1")
        .set_json(json!({ "salary": "900.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn malformed_date_in_path_is_rejected() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    let resp = get(&app, "/api/attendance/by-date/not-a-date").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = get(&app, "/api/payments/by-date/2026-13-40").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn attendance_by_date_filters_to_that_day() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    post_json(
        &app,
        "/api/employees",
        json!({ "name": "Ana", "phone": "555-0100", "start_date": "2024-01-02" }),
    )
    .await;
    for (date, present) in [
        ("2026-01-12", false),
        ("2026-01-12", true),
        ("2026-01-13", true),
    ] {
        let resp = post_json(
            &app,
            "/api/attendance",
            json!({ "employee_id": 1, "date": date, "present": present }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = get(&app, "/api/attendance/by-date/2026-01-12").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let rows: Value = test::read_body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn payroll_run_deducts_absences_and_installments() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    post_json(
        &app,
        "/api/employees",
        json!({ "name": "Juan Pérez", "phone": "555-0134", "start_date": "2023-04-17" }),
    )
    .await;
    post_json(
        &app,
        "/api/salaries",
        json!({ "employee_id": 1, "weekly_amount": "600.00" }),
    )
    .await;
    // two absences inside the lookback window for a 2026-01-14 pay date
    for date in ["2026-01-09", "2026-01-12"] {
        post_json(
            &app,
            "/api/attendance",
            json!({ "employee_id": 1, "date": date, "present": false }),
        )
        .await;
    }
    post_json(
        &app,
        "/api/loans",
        json!({
            "employee_id": 1,
            "principal": "300.00",
            "weekly_installment": "100.00",
            "reason": "medical expenses",
            "loan_date": "2026-01-05"
        }),
    )
    .await;

    let resp = post_json(
        &app,
        "/api/payroll/run",
        json!({ "employee_id": 1, "pay_date": "2026-01-14" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let payment: Value = test::read_body_json(resp).await;

    // 600 - 2 * 100 (faltas) - 100 (installment)
    assert_eq!(payment["amount"], "300.00");
    assert_eq!(payment["pay_date"], "2026-01-14");
    assert_eq!(payment["breakdown"]["faltas"]["count"], 2);
    assert_eq!(payment["breakdown"]["faltas"]["deduction"], "200.00");
    assert_eq!(payment["breakdown"]["loans"][0]["applied"], "100.00");
    assert_eq!(payment["breakdown"]["total_abonos"], "100.00");
    assert_eq!(payment["breakdown"]["sueldo_base"], "600.00");
    assert_eq!(payment["breakdown"]["total_pagado"], "300.00");

    let resp = get(&app, "/api/loans/1").await;
    let loan: Value = test::read_body_json(resp).await;
    assert_eq!(loan["remaining_balance"], "200.00");
    assert_eq!(loan["status"], "active");

    let resp = get(&app, "/api/employees/1/payments").await;
    let payments: Value = test::read_body_json(resp).await;
    assert_eq!(payments.as_array().unwrap().len(), 1);

    let resp = get(&app, "/api/employees/1/installments").await;
    let installments: Value = test::read_body_json(resp).await;
    assert_eq!(installments.as_array().unwrap().len(), 1);
    assert_eq!(installments[0]["remaining_after"], "200.00");
}

#[actix_web::test]
async fn payroll_without_salary_is_unprocessable() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    post_json(
        &app,
        "/api/employees",
        json!({ "name": "Ana", "phone": "555-0100", "start_date": "2024-01-02" }),
    )
    .await;

    let resp = post_json(
        &app,
        "/api/payroll/run",
        json!({ "employee_id": 1, "pay_date": "2026-01-14" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn manual_abono_clamps_and_settles() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    post_json(
        &app,
        "/api/employees",
        json!({ "name": "Ana", "phone": "555-0100", "start_date": "2024-01-02" }),
    )
    .await;
    post_json(
        &app,
        "/api/loans",
        json!({
            "employee_id": 1,
            "principal": "100.00",
            "weekly_installment": "40.00",
            "reason": "tools",
            "loan_date": "2026-01-05"
        }),
    )
    .await;

    let resp = post_json(
        &app,
        "/api/installments",
        json!({ "loan_id": 1, "amount": "150.00", "date": "2026-01-12" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let installment: Value = test::read_body_json(resp).await;
    assert_eq!(installment["amount"], "100.00");
    assert_eq!(installment["remaining_after"], "0.00");

    let resp = get(&app, "/api/loans/1").await;
    let loan: Value = test::read_body_json(resp).await;
    assert_eq!(loan["status"], "settled");
    assert_eq!(loan["remaining_balance"], "0.00");

    // settled loans accept no further abonos
    let resp = post_json(
        &app,
        "/api/installments",
        json!({ "loan_id": 1, "amount": "10.00", "date": "2026-01-13" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn deleting_employee_cascades_to_dependents() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    post_json(
        &app,
        "/api/employees",
        json!({ "name": "Ana", "phone": "555-0100", "start_date": "2024-01-02" }),
    )
    .await;
    post_json(
        &app,
        "/api/salaries",
        json!({ "employee_id": 1, "weekly_amount": "500.00" }),
    )
    .await;
    post_json(
        &app,
        "/api/loans",
        json!({
            "employee_id": 1,
            "principal": "200.00",
            "weekly_installment": "50.00",
            "reason": "advance",
            "loan_date": "2026-01-05"
        }),
    )
    .await;
    let resp = post_json(
        &app,
        "/api/payroll/run",
        json!({ "employee_id": 1, "pay_date": "2026-01-14" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri("/api/employees/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    for path in [
        "/api/loans",
        "/api/installments",
        "/api/payments",
        "/api/salaries",
    ] {
        let resp = get(&app, path).await;
        let rows: Value = test::read_body_json(resp).await;
        assert!(rows.as_array().unwrap().is_empty(), "{path} not empty");
    }
}

#[actix_web::test]
async fn vacation_taken_validates_date_order() {
    let pool = db::init_memory_db().await;
    let app = spawn_app!(pool);

    post_json(
        &app,
        "/api/employees",
        json!({ "name": "Ana", "phone": "555-0100", "start_date": "2024-01-02" }),
    )
    .await;

    let resp = post_json(
        &app,
        "/api/vacations-taken",
        json!({
            "employee_id": 1,
            "start_date": "2026-03-06",
            "end_date": "2026-03-02",
            "days_taken": 5
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = post_json(
        &app,
        "/api/vacations-taken",
        json!({
            "employee_id": 1,
            "start_date": "2026-03-02",
            "end_date": "2026-03-06",
            "days_taken": 5
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = get(&app, "/api/employees/1/vacations-taken").await;
    let rows: Value = test::read_body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
}
