//! Record store: one module per entity, plain sqlx queries. Every function
//! takes a `SqliteExecutor` so the payroll engine can run the same calls
//! inside a transaction.

pub mod attendance;
pub mod employees;
pub mod installments;
pub mod loans;
pub mod payments;
pub mod salaries;
pub mod vacations;
pub mod vacations_taken;
