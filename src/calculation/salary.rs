//! Net salary composition.
//!
//! Combines base salary, overtime and the period's adjustments into gross
//! income, then applies NSSF, the family deduction and progressive income
//! tax. Deductions reduce net pay after tax.

use rust_decimal::Decimal;

use crate::config::ConfigurationSnapshot;
use crate::models::{AdjustmentKind, PayrollAdjustment, SalaryBreakdown, TaxBracketLine};

use super::income_tax::calculate_income_tax;
use super::nssf::calculate_nssf;

/// A composed salary: the additive breakdown plus the tax lines behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryComposition {
    /// The pay breakdown.
    pub breakdown: SalaryBreakdown,
    /// Per-bracket income tax.
    pub tax_lines: Vec<TaxBracketLine>,
}

#[derive(Debug, Default)]
struct AdjustmentTotals {
    taxable_earnings: Decimal,
    non_taxable_earnings: Decimal,
    bonuses: Decimal,
    deductions: Decimal,
}

fn total_adjustments(adjustments: &[PayrollAdjustment]) -> AdjustmentTotals {
    adjustments
        .iter()
        .fold(AdjustmentTotals::default(), |mut totals, adjustment| {
            match adjustment.kind {
                AdjustmentKind::Earning if adjustment.taxable => {
                    totals.taxable_earnings += adjustment.amount
                }
                AdjustmentKind::Earning => totals.non_taxable_earnings += adjustment.amount,
                AdjustmentKind::Bonus => totals.bonuses += adjustment.amount,
                AdjustmentKind::Deduction => totals.deductions += adjustment.amount,
            }
            totals
        })
}

/// Returns the family deduction for a dependent count, capped at the configured maximum.
pub fn family_deduction(dependent_count: u32, snapshot: &ConfigurationSnapshot) -> Decimal {
    let settings = &snapshot.settings().family_deduction;
    Decimal::from(dependent_count.min(settings.max_dependents)) * settings.per_dependent
}

/// Composes one employee's salary for a period.
///
/// All amounts are in the local currency. Net salary is not floored and may
/// be negative when deductions exceed pay.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::calculation::compose_salary;
/// use lao_payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/lao").unwrap();
/// let composition = compose_salary(
///     Decimal::new(8_000_000, 0),
///     Decimal::ZERO,
///     &[],
///     0,
///     loader.snapshot(),
/// );
/// assert_eq!(composition.breakdown.income_tax, Decimal::new(46_024_990, 2));
/// assert_eq!(composition.breakdown.net_salary, Decimal::new(729_225_010, 2));
/// ```
pub fn compose_salary(
    base_salary: Decimal,
    overtime_pay: Decimal,
    adjustments: &[PayrollAdjustment],
    dependent_count: u32,
    snapshot: &ConfigurationSnapshot,
) -> SalaryComposition {
    let totals = total_adjustments(adjustments);

    let gross_income = base_salary + overtime_pay + totals.taxable_earnings + totals.bonuses;
    let nssf = calculate_nssf(gross_income, &snapshot.settings().nssf);
    let family = family_deduction(dependent_count, snapshot);
    let taxable_income = (gross_income - nssf.employee_amount - family).max(Decimal::ZERO);
    let tax = calculate_income_tax(taxable_income, snapshot.tax_brackets());

    let net_salary = gross_income - nssf.employee_amount - tax.tax + totals.non_taxable_earnings
        - totals.deductions;

    SalaryComposition {
        breakdown: SalaryBreakdown {
            base_salary,
            overtime_pay,
            taxable_allowances: totals.taxable_earnings,
            non_taxable_allowances: totals.non_taxable_earnings,
            allowances: totals.taxable_earnings + totals.non_taxable_earnings,
            bonus: totals.bonuses,
            gross_income,
            nssf_base: nssf.base,
            nssf_employee: nssf.employee_amount,
            nssf_employer: nssf.employer_amount,
            family_deduction: family,
            taxable_income,
            income_tax: tax.tax,
            other_deductions: totals.deductions,
            net_salary,
        },
        tax_lines: tax.lines,
    }
}
