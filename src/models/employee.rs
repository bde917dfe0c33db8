//! Employee model.
//!
//! Employees are owned by an external HR directory; the engine only reads
//! the fields it needs to price a payroll period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name of the employee.
    pub name: String,
    /// Monthly base salary in the contract currency.
    pub base_salary: Decimal,
    /// ISO code of the contract currency (e.g., "LAK", "USD").
    pub currency: String,
    /// Number of dependents declared for the family deduction.
    #[serde(default)]
    pub dependent_count: u32,
    /// Whether the employee takes part in payroll runs.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Employee {
    /// Returns true if the employee's contract is in the given currency.
    ///
    /// Currency codes are compared case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use lao_payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Somphone".to_string(),
    ///     base_salary: Decimal::new(8_000_000, 0),
    ///     currency: "lak".to_string(),
    ///     dependent_count: 0,
    ///     is_active: true,
    /// };
    /// assert!(employee.is_paid_in("LAK"));
    /// assert!(!employee.is_paid_in("USD"));
    /// ```
    pub fn is_paid_in(&self, currency: &str) -> bool {
        self.currency.eq_ignore_ascii_case(currency)
    }
}
