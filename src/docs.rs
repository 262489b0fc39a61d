use crate::api::attendance::CreateAttendance;
use crate::api::employee::CreateEmployee;
use crate::api::installment::CreateInstallment;
use crate::api::loan::{CreateLoan, UpdateLoanTerms};
use crate::api::payroll::RunPayroll;
use crate::api::salary::{CreateSalary, UpdateSalary};
use crate::api::vacation::CreateVacation;
use crate::api::vacation_taken::CreateVacationTaken;
use crate::model::{
    AbsenceDetail, Attendance, Employee, Installment, Loan, LoanInstallmentDetail, LoanStatus,
    Payment, PaymentBreakdown, Salary, Vacation, VacationTaken,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nomina API",
        version = "1.0.0",
        description = r#"
## Payroll administration backend

Manages employees and their weekly payroll: attendance, vacations,
salaries, loans with weekly installments, and the payments produced by
each payroll run.

### Key Features
- **Employee Management**
  - Create, update, list, and view employees
- **Attendance**
  - Daily present/absent records, queryable by date
- **Loans & Installments**
  - Employee loans repaid weekly, with manual abonos supported
- **Payroll**
  - One call computes deductions, settles installments, and records
    the payment with its full breakdown

### Response Format
- JSON-based RESTful responses
- Monetary amounts are decimal strings with two fraction digits

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::create_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::attendance_by_date,
        crate::api::attendance::get_attendance,
        crate::api::attendance::update_attendance,
        crate::api::attendance::delete_attendance,

        crate::api::vacation::create_vacation,
        crate::api::vacation::list_vacations,
        crate::api::vacation::get_vacation,
        crate::api::vacation::update_vacation,
        crate::api::vacation::delete_vacation,

        crate::api::vacation_taken::create_vacation_taken,
        crate::api::vacation_taken::list_vacations_taken,
        crate::api::vacation_taken::vacations_taken_for_employee,
        crate::api::vacation_taken::get_vacation_taken,
        crate::api::vacation_taken::update_vacation_taken,
        crate::api::vacation_taken::delete_vacation_taken,

        crate::api::salary::create_salary,
        crate::api::salary::list_salaries,
        crate::api::salary::get_salary,
        crate::api::salary::update_salary,
        crate::api::salary::delete_salary,

        crate::api::loan::create_loan,
        crate::api::loan::list_loans,
        crate::api::loan::loans_for_employee,
        crate::api::loan::get_loan,
        crate::api::loan::update_loan,
        crate::api::loan::delete_loan,

        crate::api::installment::create_installment,
        crate::api::installment::list_installments,
        crate::api::installment::installments_for_employee,
        crate::api::installment::get_installment,
        crate::api::installment::delete_installment,

        crate::api::payment::list_payments,
        crate::api::payment::payments_by_date,
        crate::api::payment::payments_for_employee,
        crate::api::payment::get_payment,
        crate::api::payment::delete_payment,

        crate::api::payroll::run_payroll
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Attendance,
            CreateAttendance,
            Vacation,
            CreateVacation,
            VacationTaken,
            CreateVacationTaken,
            Salary,
            CreateSalary,
            UpdateSalary,
            Loan,
            LoanStatus,
            CreateLoan,
            UpdateLoanTerms,
            Installment,
            CreateInstallment,
            Payment,
            PaymentBreakdown,
            AbsenceDetail,
            LoanInstallmentDetail,
            RunPayroll
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Daily attendance APIs"),
        (name = "Vacation", description = "Vacation balance APIs"),
        (name = "VacationTaken", description = "Vacation history APIs"),
        (name = "Salary", description = "Weekly salary APIs"),
        (name = "Loan", description = "Employee loan APIs"),
        (name = "Installment", description = "Loan installment (abono) APIs"),
        (name = "Payment", description = "Payment record APIs"),
        (name = "Payroll", description = "Payroll cycle APIs"),
    )
)]
pub struct ApiDoc;
