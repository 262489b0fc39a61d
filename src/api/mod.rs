pub mod attendance;
pub mod employee;
pub mod installment;
pub mod loan;
pub mod payment;
pub mod payroll;
pub mod salary;
pub mod vacation;
pub mod vacation_taken;
