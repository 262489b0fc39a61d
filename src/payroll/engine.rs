use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::SqliteConnection;
use sqlx::sqlite::SqlitePool;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{
    AbsenceDetail, Installment, Loan, LoanInstallmentDetail, LoanStatus, Payment, PaymentBreakdown,
};
use crate::money::to_cents;
use crate::payroll::locks::PayrollLocks;
use crate::store;

/// The fixed weekly rest day, excluded from the attendance window.
pub const REST_DAY: Weekday = Weekday::Sun;

/// The lookback window ends the day before the pay date and spans this many
/// calendar days.
const LOOKBACK_DAYS: i64 = 5;

/// A weekly salary covers six paid days (everything but the rest day).
const PAID_DAYS_PER_WEEK: i64 = 6;

/// One day's wage: weekly salary divided by six, rounded to two decimal
/// places, round-half-up (midpoint away from zero). The attendance deduction
/// is always `faltas * daily_rate`.
pub fn daily_rate(weekly_salary: Decimal) -> Decimal {
    (weekly_salary / Decimal::from(PAID_DAYS_PER_WEEK))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Counts faltas (absence rows) in `[as_of - 5 days, as_of - 1 day]`,
/// skipping rows that fall on the rest day. Duplicate same-day rows each
/// count: the schema permits them and the original behavior is preserved.
async fn count_faltas(
    conn: &mut SqliteConnection,
    employee_id: i64,
    as_of: NaiveDate,
) -> Result<u32> {
    let start = as_of - Duration::days(LOOKBACK_DAYS);
    let end = as_of - Duration::days(1);
    let absences = store::attendance::list_absences_between(conn, employee_id, start, end).await?;
    Ok(absences
        .iter()
        .filter(|a| a.date.weekday() != REST_DAY)
        .count() as u32)
}

/// Applies one settlement against a loan: the applied amount is clamped to
/// the remaining balance, the balance never goes negative, and the status
/// flips to settled the moment it reaches zero. Writes the loan update and
/// the installment record; the caller supplies the transaction scope.
pub(crate) async fn apply_to_loan(
    conn: &mut SqliteConnection,
    loan: &Loan,
    amount: Decimal,
    date: NaiveDate,
) -> Result<Installment> {
    let applied = amount.min(loan.remaining_balance);
    let remaining_after = loan.remaining_balance - applied;
    let status = if remaining_after.is_zero() {
        LoanStatus::Settled
    } else {
        LoanStatus::Active
    };

    store::loans::apply_settlement(&mut *conn, loan.id, to_cents(remaining_after)?, status).await?;
    let installment = store::installments::insert(
        &mut *conn,
        loan.employee_id,
        loan.id,
        to_cents(applied)?,
        date,
        to_cents(remaining_after)?,
    )
    .await?;

    Ok(installment)
}

/// Runs one payroll cycle for the employee and returns the created payment.
///
/// The whole cycle (loan updates, installment inserts, the payment insert)
/// executes inside a single transaction: a failure anywhere rolls everything
/// back, so a loan is never decremented without its installment record.
///
/// Not idempotent: re-running for the same date appends another payment and
/// deducts another round of installments. That matches the original system
/// and is documented behavior, not a bug.
pub async fn run_payroll_cycle(
    pool: &SqlitePool,
    locks: &PayrollLocks,
    employee_id: i64,
    as_of: NaiveDate,
) -> Result<Payment> {
    let _guard = locks
        .try_acquire(employee_id)
        .await
        .ok_or(Error::ConcurrencyConflict { employee_id })?;

    let mut tx = pool.begin().await?;

    if !store::employees::exists(&mut *tx, employee_id).await? {
        return Err(Error::not_found("employee", employee_id));
    }

    let salary = store::salaries::current_for_employee(&mut *tx, employee_id)
        .await?
        .ok_or(Error::NoSalaryConfigured { employee_id })?;

    let faltas = count_faltas(&mut tx, employee_id, as_of).await?;
    let deduction = daily_rate(salary.weekly_amount) * Decimal::from(faltas);

    let mut loan_details = Vec::new();
    let mut total_abonos = Decimal::ZERO;
    for loan in store::loans::active_for_employee(&mut *tx, employee_id).await? {
        let installment = apply_to_loan(&mut tx, &loan, loan.weekly_installment, as_of).await?;
        total_abonos += installment.amount;
        loan_details.push(LoanInstallmentDetail {
            loan_id: loan.id,
            applied: installment.amount,
            remaining_after: installment.remaining_after,
            reason: loan.reason.clone(),
        });
    }

    // Net pay is signed: over-deduction is not clamped.
    let net = salary.weekly_amount - deduction - total_abonos;

    let breakdown = PaymentBreakdown {
        faltas: AbsenceDetail {
            count: faltas,
            deduction,
        },
        loans: loan_details,
        total_abonos,
        sueldo_base: salary.weekly_amount,
        total_pagado: net,
    };
    let breakdown_json = serde_json::to_string(&breakdown)?;

    let payment =
        store::payments::insert(&mut *tx, employee_id, to_cents(net)?, as_of, &breakdown_json)
            .await?;

    tx.commit().await?;

    info!(
        employee_id,
        pay_date = %as_of,
        net = %payment.amount,
        faltas,
        loans = payment.breakdown.loans.len(),
        "payroll cycle complete"
    );

    Ok(payment)
}
