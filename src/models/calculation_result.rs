//! Calculation result models for the payroll engine.
//!
//! This module contains the [`SalaryCalculationResult`] persisted for every
//! employee of a payroll run, the pure [`SalaryBreakdown`] it embeds, and the
//! breakdown lines produced by the overtime and income tax calculations.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The pricing of worked hours that fell into one overtime bucket on one date.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::models::OvertimeLine;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let line = OvertimeLine {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     bucket: "evening".to_string(),
///     hours: Decimal::new(2, 0),
///     hourly_rate: Decimal::new(40_000, 0),
///     multiplier: Decimal::new(15, 1),
///     amount: Decimal::new(120_000, 0),
/// };
/// assert_eq!(line.hours * line.hourly_rate * line.multiplier, line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeLine {
    /// The attendance date the bucket is anchored to.
    pub date: NaiveDate,
    /// The name of the rate bucket.
    pub bucket: String,
    /// Payable hours inside the bucket.
    pub hours: Decimal,
    /// The hourly rate derived from the base salary.
    pub hourly_rate: Decimal,
    /// The bucket's pay multiplier.
    pub multiplier: Decimal,
    /// `hours × hourly_rate × multiplier`, unrounded.
    pub amount: Decimal,
}

/// The tax levied on the slice of income that fell into one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketLine {
    /// The bracket's sort order.
    pub sort_order: i32,
    /// The income consumed by the bracket.
    pub taxed_amount: Decimal,
    /// The bracket rate.
    pub rate: Decimal,
    /// The tax for the slice, rounded to 2 decimals.
    pub tax: Decimal,
}

/// The additive breakdown of one employee's pay, all in local currency.
///
/// `gross_income = base_salary + overtime_pay + taxable_allowances + bonus`
/// and `net_salary = gross_income - nssf_employee - income_tax
/// + non_taxable_allowances - other_deductions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Base salary.
    pub base_salary: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Earnings that count towards gross income.
    pub taxable_allowances: Decimal,
    /// Earnings paid on top of net salary.
    pub non_taxable_allowances: Decimal,
    /// All earnings, taxable or not.
    pub allowances: Decimal,
    /// Bonuses.
    pub bonus: Decimal,
    /// Gross income.
    pub gross_income: Decimal,
    /// Income subject to NSSF, capped at the ceiling.
    pub nssf_base: Decimal,
    /// Employee NSSF contribution.
    pub nssf_employee: Decimal,
    /// Employer NSSF contribution.
    pub nssf_employer: Decimal,
    /// Family deduction subtracted before tax.
    pub family_deduction: Decimal,
    /// Income subject to progressive tax.
    pub taxable_income: Decimal,
    /// Personal income tax.
    pub income_tax: Decimal,
    /// Flat deductions from net salary.
    pub other_deductions: Decimal,
    /// Net salary; may be negative.
    pub net_salary: Decimal,
}

/// Contract-currency figures for an employee not paid in the local currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettlement {
    /// The contract currency.
    pub currency: String,
    /// Local currency units per contract currency unit used for the run.
    pub exchange_rate: Decimal,
    /// Base salary in the contract currency.
    pub original_base_salary: Decimal,
    /// Net salary converted back into the contract currency.
    pub original_net_salary: Decimal,
}

/// The persisted result of computing one employee for one payroll period.
///
/// There is exactly one result per (employee, period); recomputation
/// replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The employee the result is for.
    pub employee_id: String,
    /// The payroll period the result belongs to.
    pub period_id: String,
    /// The local (reporting) currency of the breakdown.
    pub local_currency: String,
    /// The pay breakdown in local currency.
    pub breakdown: SalaryBreakdown,
    /// Total payable overtime hours.
    pub overtime_hours: Decimal,
    /// Per-bucket overtime pricing.
    pub overtime_lines: Vec<OvertimeLine>,
    /// Per-bracket income tax.
    pub tax_lines: Vec<TaxBracketLine>,
    /// Contract-currency figures, present only for foreign-currency contracts.
    pub settlement: Option<CurrencySettlement>,
}
