use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use utoipa::ToSchema;

use crate::money::from_cents;

/// Attendance deductions applied in one payroll cycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AbsenceDetail {
    #[schema(example = 2)]
    pub count: u32,

    #[schema(example = "200.00", value_type = String)]
    pub deduction: Decimal,
}

/// Per-loan installment detail inside a payment breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanInstallmentDetail {
    #[schema(example = 1)]
    pub loan_id: i64,

    #[schema(example = "100.00", value_type = String)]
    pub applied: Decimal,

    #[schema(example = "200.00", value_type = String)]
    pub remaining_after: Decimal,

    #[schema(example = "medical expenses")]
    pub reason: String,
}

/// How a payment's net amount was derived. Written once when the payment is
/// created; the net amount must be reproducible from it.
///
/// The key names (`faltas`, `loans`, `total_abonos`, `sueldo_base`,
/// `total_pagado`) are a durable contract consumed by downstream reporting
/// and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentBreakdown {
    pub faltas: AbsenceDetail,

    pub loans: Vec<LoanInstallmentDetail>,

    #[schema(example = "100.00", value_type = String)]
    pub total_abonos: Decimal,

    #[schema(example = "700.00", value_type = String)]
    pub sueldo_base: Decimal,

    #[schema(example = "400.00", value_type = String)]
    pub total_pagado: Decimal,
}

/// One payroll disbursement for one employee on one date. `amount` is the
/// net pay and may be negative (over-deduction is not clamped).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "400.00", value_type = String)]
    pub amount: Decimal,

    #[schema(example = "2026-01-12", value_type = String, format = "date")]
    pub pay_date: NaiveDate,

    pub breakdown: PaymentBreakdown,
}

impl sqlx::FromRow<'_, SqliteRow> for Payment {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let raw: String = row.try_get("breakdown")?;
        let breakdown =
            serde_json::from_str(&raw).map_err(|e| sqlx::Error::ColumnDecode {
                index: "breakdown".into(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            amount: from_cents(row.try_get("amount_cents")?),
            pay_date: row.try_get("pay_date")?,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn breakdown_serializes_with_contract_keys() {
        let breakdown = PaymentBreakdown {
            faltas: AbsenceDetail {
                count: 2,
                deduction: dec("200.00"),
            },
            loans: vec![LoanInstallmentDetail {
                loan_id: 4,
                applied: dec("100.00"),
                remaining_after: dec("50.00"),
                reason: "school supplies".to_string(),
            }],
            total_abonos: dec("100.00"),
            sueldo_base: dec("600.00"),
            total_pagado: dec("300.00"),
        };

        let value = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(value["faltas"]["count"], 2);
        assert_eq!(value["faltas"]["deduction"], "200.00");
        assert_eq!(value["loans"][0]["loan_id"], 4);
        assert_eq!(value["loans"][0]["applied"], "100.00");
        assert_eq!(value["loans"][0]["remaining_after"], "50.00");
        assert_eq!(value["total_abonos"], "100.00");
        assert_eq!(value["sueldo_base"], "600.00");
        assert_eq!(value["total_pagado"], "300.00");
    }

    #[test]
    fn breakdown_round_trips() {
        let json = r#"{
            "faltas": {"count": 0, "deduction": "0.00"},
            "loans": [],
            "total_abonos": "0.00",
            "sueldo_base": "700.00",
            "total_pagado": "700.00"
        }"#;
        let breakdown: PaymentBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown.faltas.count, 0);
        assert_eq!(breakdown.total_pagado, dec("700.00"));
        assert!(breakdown.loans.is_empty());
    }
}
