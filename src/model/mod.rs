pub mod attendance;
pub mod employee;
pub mod installment;
pub mod loan;
pub mod payment;
pub mod salary;
pub mod vacation;
pub mod vacation_taken;

pub use attendance::Attendance;
pub use employee::Employee;
pub use installment::Installment;
pub use loan::{Loan, LoanStatus};
pub use payment::{AbsenceDetail, LoanInstallmentDetail, Payment, PaymentBreakdown};
pub use salary::Salary;
pub use vacation::Vacation;
pub use vacation_taken::VacationTaken;
