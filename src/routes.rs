use crate::{
    api::{
        attendance, employee, installment, loan, payment, payroll, salary, vacation,
        vacation_taken,
    },
    config::Config,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // per-employee projections; registered before /{id}
                    .service(
                        web::resource("/{id}/loans")
                            .route(web::get().to(loan::loans_for_employee)),
                    )
                    .service(
                        web::resource("/{id}/installments")
                            .route(web::get().to(installment::installments_for_employee)),
                    )
                    .service(
                        web::resource("/{id}/payments")
                            .route(web::get().to(payment::payments_for_employee)),
                    )
                    .service(
                        web::resource("/{id}/vacations-taken")
                            .route(web::get().to(vacation_taken::vacations_taken_for_employee)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    .service(
                        web::resource("")
                            .route(web::post().to(attendance::create_attendance))
                            .route(web::get().to(attendance::list_attendance)),
                    )
                    .service(
                        web::resource("/by-date/{date}")
                            .route(web::get().to(attendance::attendance_by_date)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(attendance::get_attendance))
                            .route(web::put().to(attendance::update_attendance))
                            .route(web::delete().to(attendance::delete_attendance)),
                    ),
            )
            .service(
                web::scope("/vacations")
                    .service(
                        web::resource("")
                            .route(web::post().to(vacation::create_vacation))
                            .route(web::get().to(vacation::list_vacations)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(vacation::get_vacation))
                            .route(web::put().to(vacation::update_vacation))
                            .route(web::delete().to(vacation::delete_vacation)),
                    ),
            )
            .service(
                web::scope("/vacations-taken")
                    .service(
                        web::resource("")
                            .route(web::post().to(vacation_taken::create_vacation_taken))
                            .route(web::get().to(vacation_taken::list_vacations_taken)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(vacation_taken::get_vacation_taken))
                            .route(web::put().to(vacation_taken::update_vacation_taken))
                            .route(web::delete().to(vacation_taken::delete_vacation_taken)),
                    ),
            )
            .service(
                web::scope("/salaries")
                    .service(
                        web::resource("")
                            .route(web::post().to(salary::create_salary))
                            .route(web::get().to(salary::list_salaries)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(salary::get_salary))
                            .route(web::put().to(salary::update_salary))
                            .route(web::delete().to(salary::delete_salary)),
                    ),
            )
            .service(
                web::scope("/loans")
                    .service(
                        web::resource("")
                            .route(web::post().to(loan::create_loan))
                            .route(web::get().to(loan::list_loans)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(loan::get_loan))
                            .route(web::put().to(loan::update_loan))
                            .route(web::delete().to(loan::delete_loan)),
                    ),
            )
            .service(
                web::scope("/installments")
                    .service(
                        web::resource("")
                            .route(web::post().to(installment::create_installment))
                            .route(web::get().to(installment::list_installments)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(installment::get_installment))
                            .route(web::delete().to(installment::delete_installment)),
                    ),
            )
            .service(
                web::scope("/payments")
                    .service(web::resource("").route(web::get().to(payment::list_payments)))
                    .service(
                        web::resource("/by-date/{date}")
                            .route(web::get().to(payment::payments_by_date)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(payment::get_payment))
                            .route(web::delete().to(payment::delete_payment)),
                    ),
            )
            .service(
                web::scope("/payroll")
                    .service(web::resource("/run").route(web::post().to(payroll::run_payroll))),
            ),
    );
}
