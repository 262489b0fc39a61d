//! The payroll engine: one cycle per call, one atomic transaction per cycle,
//! per-employee serialization via [`PayrollLocks`].

mod engine;
mod locks;

pub use engine::{REST_DAY, daily_rate, run_payroll_cycle};
pub(crate) use engine::apply_to_loan;
pub use locks::PayrollLocks;
