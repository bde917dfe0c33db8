//! Currency conversion rate model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// A dated conversion rate between two currencies.
///
/// `rate` is the number of `to_currency` units for one `from_currency` unit.
/// Several rows may exist for the same pair; the most recent effective,
/// unexpired row wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRate {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Units of target currency per unit of source currency.
    pub rate: Decimal,
    /// First date the rate applies to.
    pub effective_date: NaiveDate,
    /// Date from which the rate no longer applies, if any.
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    /// Whether the rate is in force.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ConversionRate {
    /// Returns true if the rate is usable on the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use lao_payroll_engine::models::ConversionRate;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let rate = ConversionRate {
    ///     from_currency: "USD".to_string(),
    ///     to_currency: "LAK".to_string(),
    ///     rate: Decimal::new(21_500, 0),
    ///     effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     expiry_date: Some(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()),
    ///     is_active: true,
    /// };
    /// assert!(rate.applies_on(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
    /// assert!(!rate.applies_on(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
    /// ```
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self.effective_date <= date
            && self.expiry_date.is_none_or(|expiry| expiry > date)
    }

    /// Returns true if the rate converts between the given currencies in that direction.
    pub fn is_pair(&self, from: &str, to: &str) -> bool {
        self.from_currency.eq_ignore_ascii_case(from) && self.to_currency.eq_ignore_ascii_case(to)
    }
}
