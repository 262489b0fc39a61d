//! Exact money conversion between the domain (`Decimal`, two fractional
//! digits) and storage (INTEGER cents). Floating point is never involved.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Error, Result};

/// Converts an amount to cents, rejecting values with more than two decimal
/// places or outside the i64 cent range.
pub fn to_cents(amount: Decimal) -> Result<i64> {
    let cents = amount * Decimal::ONE_HUNDRED;
    if cents.fract() != Decimal::ZERO {
        return Err(Error::invalid(format!(
            "amount {amount} has more than two decimal places"
        )));
    }
    cents
        .to_i64()
        .ok_or_else(|| Error::invalid(format!("amount {amount} is out of range")))
}

pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
