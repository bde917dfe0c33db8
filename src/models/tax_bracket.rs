//! Personal income tax bracket model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// One bracket of the progressive income tax table.
///
/// Brackets are inclusive integer ranges: `[1_300_001, 5_000_000]` covers a
/// span of `3_700_000`. An open-ended top bracket has no `max_income`.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = TaxBracket {
///     sort_order: 2,
///     min_income: Decimal::new(1_300_001, 0),
///     max_income: Some(Decimal::new(5_000_000, 0)),
///     rate: Decimal::new(5, 2),
///     is_active: true,
/// };
/// assert_eq!(bracket.span(), Some(Decimal::new(3_700_000, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Position of the bracket in the table; lower values are applied first.
    pub sort_order: i32,
    /// Lowest income in the bracket (inclusive).
    pub min_income: Decimal,
    /// Highest income in the bracket (inclusive); `None` for the top bracket.
    #[serde(default)]
    pub max_income: Option<Decimal>,
    /// Flat rate applied to income within the bracket, as a fraction (0.05 = 5%).
    pub rate: Decimal,
    /// Whether the bracket participates in tax calculation.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl TaxBracket {
    /// The amount of income the bracket can absorb, or `None` when unbounded.
    pub fn span(&self) -> Option<Decimal> {
        self.max_income
            .map(|max| max - self.min_income + Decimal::ONE)
    }
}
