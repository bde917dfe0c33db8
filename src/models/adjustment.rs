//! Payroll adjustment model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of a payroll adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    /// An extra earning such as an allowance; taxable or not per the adjustment.
    Earning,
    /// A flat reduction of net pay, applied after tax.
    Deduction,
    /// A bonus; always part of gross income.
    Bonus,
}

/// A named amount added to or taken from one employee's pay for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollAdjustment {
    /// The employee the adjustment applies to.
    pub employee_id: String,
    /// The payroll period the adjustment applies to.
    pub period_id: String,
    /// Human-readable name (e.g., "Housing allowance").
    pub name: String,
    /// The kind of adjustment.
    pub kind: AdjustmentKind,
    /// The amount in the local currency.
    pub amount: Decimal,
    /// Whether an earning counts towards gross income. Ignored for other kinds.
    #[serde(default)]
    pub taxable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&AdjustmentKind::Earning).unwrap(),
            "\"EARNING\""
        );
        assert_eq!(
            serde_json::to_string(&AdjustmentKind::Deduction).unwrap(),
            "\"DEDUCTION\""
        );
        assert_eq!(
            serde_json::to_string(&AdjustmentKind::Bonus).unwrap(),
            "\"BONUS\""
        );
    }

    #[test]
    fn test_deserialize_adjustment_defaults_to_non_taxable() {
        let json = r#"{
            "employee_id": "emp_001",
            "period_id": "2026-01",
            "name": "Meal allowance",
            "kind": "EARNING",
            "amount": "300000"
        }"#;
        let adjustment: PayrollAdjustment = serde_json::from_str(json).unwrap();
        assert_eq!(adjustment.kind, AdjustmentKind::Earning);
        assert_eq!(adjustment.amount, Decimal::new(300_000, 0));
        assert!(!adjustment.taxable);
    }
}
