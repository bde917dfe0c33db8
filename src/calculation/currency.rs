//! Currency conversion.
//!
//! A rate is resolved in a fixed order: identical currencies convert at 1
//! without any lookup; otherwise the most recent active, unexpired rate row
//! for the pair is used; otherwise the configured fallback constants apply,
//! and unknown currencies convert at 1. Historical rows therefore apply to
//! past periods, while a fresh installation still computes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::{ConfigurationSnapshot, PayrollSettings};
use crate::error::EngineResult;
use crate::models::ConversionRate;
use crate::store::ConversionRateStore;

/// Returns true if two currency codes name the same currency.
pub fn is_same_currency(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Picks the rate of the latest-effective row usable on `as_of` for `from → to`.
///
/// Rows with a non-positive rate are ignored.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::calculation::select_rate;
/// use lao_payroll_engine::models::ConversionRate;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let row = |rate: i64, day: u32| ConversionRate {
///     from_currency: "USD".to_string(),
///     to_currency: "LAK".to_string(),
///     rate: Decimal::from(rate),
///     effective_date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
///     expiry_date: None,
///     is_active: true,
/// };
/// let rows = vec![row(21_000, 1), row(21_400, 15), row(21_900, 28)];
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
/// assert_eq!(select_rate(&rows, "USD", "LAK", as_of), Some(Decimal::from(21_400)));
/// ```
pub fn select_rate(
    candidates: &[ConversionRate],
    from: &str,
    to: &str,
    as_of: NaiveDate,
) -> Option<Decimal> {
    candidates
        .iter()
        .filter(|r| r.is_pair(from, to) && r.applies_on(as_of) && r.rate > Decimal::ZERO)
        .max_by_key(|r| r.effective_date)
        .map(|r| r.rate)
}

/// Local-currency units for one unit of `currency`, from the fallback constants.
fn local_units(settings: &PayrollSettings, currency: &str) -> Option<Decimal> {
    if is_same_currency(currency, &settings.local_currency) {
        return Some(Decimal::ONE);
    }
    settings
        .fallback_rates
        .iter()
        .find(|(code, rate)| is_same_currency(code, currency) && **rate > Decimal::ZERO)
        .map(|(_, rate)| *rate)
}

/// Converts between two currencies using only the fallback constants.
///
/// Both sides are expressed in local-currency units; if either currency is
/// unknown the rate is 1.
pub fn fallback_rate(settings: &PayrollSettings, from: &str, to: &str) -> Decimal {
    match (local_units(settings, from), local_units(settings, to)) {
        (Some(from_units), Some(to_units)) => from_units / to_units,
        _ => Decimal::ONE,
    }
}

/// Resolves conversion rates against a rate store and a configuration snapshot.
pub struct CurrencyConverter<'a, R: ConversionRateStore + ?Sized> {
    snapshot: &'a ConfigurationSnapshot,
    rates: &'a R,
}

impl<'a, R: ConversionRateStore + ?Sized> CurrencyConverter<'a, R> {
    /// Creates a converter over the given snapshot and rate store.
    pub fn new(snapshot: &'a ConfigurationSnapshot, rates: &'a R) -> Self {
        Self { snapshot, rates }
    }

    /// Returns the number of `to` units for one `from` unit on `as_of`.
    ///
    /// The result is always positive, and exactly 1 for identical currencies.
    pub async fn rate(&self, from: &str, to: &str, as_of: NaiveDate) -> EngineResult<Decimal> {
        if is_same_currency(from, to) {
            return Ok(Decimal::ONE);
        }

        let candidates = self.rates.rates_for_pair(from, to).await?;
        if let Some(rate) = select_rate(&candidates, from, to, as_of) {
            return Ok(rate);
        }

        let rate = fallback_rate(self.snapshot.settings(), from, to);
        warn!(
            from = %from,
            to = %to,
            as_of = %as_of,
            rate = %rate,
            "No conversion rate on file; using fallback constant"
        );
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryPayrollStore;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn usd_lak(rate: &str, effective: &str, expiry: Option<&str>) -> ConversionRate {
        ConversionRate {
            from_currency: "USD".to_string(),
            to_currency: "LAK".to_string(),
            rate: dec(rate),
            effective_date: make_date(effective),
            expiry_date: expiry.map(make_date),
            is_active: true,
        }
    }

    #[test]
    fn test_select_rate_ignores_expired_and_future_rows() {
        let rows = vec![
            usd_lak("20000", "2025-01-01", Some("2025-12-31")),
            usd_lak("21000", "2025-06-01", None),
            usd_lak("22000", "2026-03-01", None),
        ];
        assert_eq!(
            select_rate(&rows, "USD", "LAK", make_date("2026-01-31")),
            Some(dec("21000"))
        );
        assert_eq!(
            select_rate(&rows, "USD", "LAK", make_date("2025-03-01")),
            Some(dec("20000"))
        );
    }

    #[test]
    fn test_select_rate_skips_non_positive_rows() {
        let rows = vec![usd_lak("21000", "2025-01-01", None), usd_lak("0", "2026-01-01", None)];
        assert_eq!(
            select_rate(&rows, "USD", "LAK", make_date("2026-01-31")),
            Some(dec("21000"))
        );
    }

    #[test]
    fn test_select_rate_none_before_first_row() {
        let rows = vec![usd_lak("21000", "2026-01-01", None)];
        assert_eq!(select_rate(&rows, "USD", "LAK", make_date("2025-12-31")), None);
    }

    #[test]
    fn test_fallback_rate_for_known_and_unknown_currencies() {
        let settings = PayrollSettings::default();
        assert_eq!(fallback_rate(&settings, "USD", "LAK"), dec("21500"));
        assert_eq!(fallback_rate(&settings, "thb", "LAK"), dec("620"));
        assert_eq!(fallback_rate(&settings, "LAK", "USD"), Decimal::ONE / dec("21500"));
        assert_eq!(fallback_rate(&settings, "EUR", "LAK"), Decimal::ONE);
    }

    #[test]
    fn test_fallback_rate_between_two_foreign_currencies() {
        let settings = PayrollSettings::default();
        assert_eq!(fallback_rate(&settings, "USD", "THB"), dec("21500") / dec("620"));
    }

    #[tokio::test]
    async fn test_same_currency_is_one_without_lookup() {
        let snapshot = ConfigurationSnapshot::default();
        let store = InMemoryPayrollStore::new();
        store.add_conversion_rate(usd_lak("99", "2000-01-01", None)).await;
        let converter = CurrencyConverter::new(&snapshot, &store);

        let rate = converter.rate("LAK", "lak", make_date("2026-01-31")).await.unwrap();
        assert_eq!(rate, Decimal::ONE);
    }

    #[tokio::test]
    async fn test_stored_rate_wins_over_fallback() {
        let snapshot = ConfigurationSnapshot::default();
        let store = InMemoryPayrollStore::new();
        store.add_conversion_rate(usd_lak("21850", "2026-01-01", None)).await;
        let converter = CurrencyConverter::new(&snapshot, &store);

        let rate = converter.rate("USD", "LAK", make_date("2026-01-31")).await.unwrap();
        assert_eq!(rate, dec("21850"));
    }

    #[tokio::test]
    async fn test_fallback_used_when_no_row_applies() {
        let snapshot = ConfigurationSnapshot::default();
        let store = InMemoryPayrollStore::new();
        store.add_conversion_rate(usd_lak("21850", "2026-02-01", None)).await;
        let converter = CurrencyConverter::new(&snapshot, &store);

        let rate = converter.rate("USD", "LAK", make_date("2026-01-31")).await.unwrap();
        assert_eq!(rate, dec("21500"));
    }
}
