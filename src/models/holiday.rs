//! Holiday model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// A public or company holiday.
///
/// A recurring holiday applies every year on the month/day of `date`.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let national_day = Holiday {
///     date: NaiveDate::from_ymd_opt(2020, 12, 2).unwrap(),
///     name: "Lao National Day".to_string(),
///     recurring: true,
///     is_active: true,
/// };
/// assert!(national_day.applies_on(NaiveDate::from_ymd_opt(2026, 12, 2).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday (only month and day matter when recurring).
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Whether the holiday repeats every year.
    #[serde(default)]
    pub recurring: bool,
    /// Whether the holiday is in force.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Holiday {
    /// Returns true if this holiday is active and falls on the given date.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        if !self.is_active {
            return false;
        }
        if self.recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }

    /// Returns true if this holiday applies on any date in `[start, end]`.
    pub fn falls_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        if !self.is_active || start > end {
            return false;
        }
        if !self.recurring {
            return self.date >= start && self.date <= end;
        }
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .any(|d| self.applies_on(d))
    }
}
