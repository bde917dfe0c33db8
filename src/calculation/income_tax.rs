//! Progressive personal income tax.
//!
//! Brackets are consumed in ascending order. Each bracket taxes only the slice
//! of income that fits in its span, at its own rate; the slice tax is rounded
//! to cents before being added to the total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{TaxBracket, TaxBracketLine};

use super::rounding::round_money;

/// The result of a progressive tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// The income that was taxed.
    pub taxable_income: Decimal,
    /// The total tax, never negative.
    pub tax: Decimal,
    /// One line per bracket that absorbed income.
    pub lines: Vec<TaxBracketLine>,
}

/// Calculates progressive income tax.
///
/// `brackets` must already be the active brackets in ascending order (as
/// held by [`ConfigurationSnapshot`](crate::config::ConfigurationSnapshot)).
/// An empty table yields zero tax.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::calculation::calculate_income_tax;
/// use lao_payroll_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let brackets = vec![
///     TaxBracket { sort_order: 1, min_income: Decimal::ZERO, max_income: Some(Decimal::new(1_300_000, 0)), rate: Decimal::ZERO, is_active: true },
///     TaxBracket { sort_order: 2, min_income: Decimal::new(1_300_001, 0), max_income: None, rate: Decimal::new(5, 2), is_active: true },
/// ];
/// let result = calculate_income_tax(Decimal::new(2_300_001, 0), &brackets);
/// assert_eq!(result.tax, Decimal::new(50_000, 0));
/// ```
pub fn calculate_income_tax(taxable_income: Decimal, brackets: &[TaxBracket]) -> IncomeTaxResult {
    let mut remaining = taxable_income;
    let mut tax = Decimal::ZERO;
    let mut lines = Vec::new();

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxed_amount = match bracket.span() {
            Some(span) if span <= Decimal::ZERO => continue,
            Some(span) => remaining.min(span),
            None => remaining,
        };

        let slice_tax = round_money(taxed_amount * bracket.rate);
        tax += slice_tax;
        remaining -= taxed_amount;

        lines.push(TaxBracketLine {
            sort_order: bracket.sort_order,
            taxed_amount,
            rate: bracket.rate,
            tax: slice_tax,
        });
    }

    IncomeTaxResult {
        taxable_income,
        tax: tax.max(Decimal::ZERO),
        lines,
    }
}
