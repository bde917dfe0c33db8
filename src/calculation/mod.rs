//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculators of a payroll run: money
//! rounding, currency conversion, NSSF contributions, progressive income tax,
//! day classification and rate buckets for overtime, overtime pricing from
//! attendance, and net salary composition. None of them perform I/O except
//! [`CurrencyConverter`], which reads conversion rates from a store.

mod currency;
mod day_classification;
mod income_tax;
mod nssf;
mod overtime;
mod rate_buckets;
mod rounding;
mod salary;

pub use currency::{CurrencyConverter, fallback_rate, is_same_currency, select_rate};
pub use day_classification::{DayClass, classify_day};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use nssf::{NssfContribution, calculate_nssf};
pub use overtime::{OvertimeResult, calculate_overtime, hourly_rate};
pub use rate_buckets::{
    DAY_START_OFFSET, EVENING_START_OFFSET, NIGHT_END_OFFSET, NIGHT_START_OFFSET, RateBucket,
    minute_offset, rate_buckets,
};
pub use rounding::{MONEY_SCALE, round_money};
pub use salary::{SalaryComposition, compose_salary, family_deduction};
