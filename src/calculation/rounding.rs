//! Money rounding.
//!
//! Every monetary rounding in the engine goes through [`round_money`] so that
//! NSSF, tax, overtime and currency totals agree to the cent.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on money amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to 2 decimal places, midpoint away from zero.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(10005, 3)), Decimal::new(1001, 2)); // 10.005 -> 10.01
/// assert_eq!(round_money(Decimal::new(-10005, 3)), Decimal::new(-1001, 2));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // Banker's rounding would give 0.12 here
        assert_eq!(round_money(dec("0.125")), dec("0.13"));
        assert_eq!(round_money(dec("0.135")), dec("0.14"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_money(dec("275249.904")), dec("275249.90"));
    }

    #[test]
    fn test_exact_amounts_unchanged() {
        assert_eq!(round_money(dec("247500")), dec("247500"));
    }
}
