//! National Social Security Fund contributions.
//!
//! Contributions are levied on gross income capped at the configured ceiling,
//! at separate employee and employer rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::NssfSettings;

use super::rounding::round_money;

/// The NSSF contribution for one month of income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NssfContribution {
    /// Income subject to contributions, `min(gross, ceiling)`.
    pub base: Decimal,
    /// Employee contribution, withheld from pay.
    pub employee_amount: Decimal,
    /// Employer contribution, paid on top of pay.
    pub employer_amount: Decimal,
}

/// Calculates NSSF contributions on a gross income.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::calculation::calculate_nssf;
/// use lao_payroll_engine::config::NssfSettings;
/// use rust_decimal::Decimal;
///
/// let nssf = calculate_nssf(Decimal::new(8_000_000, 0), &NssfSettings::default());
/// assert_eq!(nssf.base, Decimal::new(4_500_000, 0));
/// assert_eq!(nssf.employee_amount, Decimal::new(247_500, 0));
/// assert_eq!(nssf.employer_amount, Decimal::new(270_000, 0));
/// ```
pub fn calculate_nssf(gross_income: Decimal, settings: &NssfSettings) -> NssfContribution {
    let base = gross_income.min(settings.ceiling);
    NssfContribution {
        base,
        employee_amount: round_money(base * settings.employee_rate),
        employer_amount: round_money(base * settings.employer_rate),
    }
}
