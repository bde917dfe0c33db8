//! Payroll period model and its status machine.
//!
//! A period's status gates whether it may be computed. Only `DRAFT` and
//! `PROCESSING` periods accept a run; `APPROVED`, `LOCKED` and `COMPLETED`
//! periods are final as far as the engine is concerned.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The lifecycle status of a payroll period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodStatus {
    /// Open for data entry; never computed.
    Draft,
    /// Computed at least once; may be recomputed.
    Processing,
    /// Approved for payment.
    Approved,
    /// Locked against any change.
    Locked,
    /// Paid out and closed.
    Completed,
}

impl PeriodStatus {
    /// Returns true if a payroll run may (re)compute a period in this status.
    pub fn is_runnable(self) -> bool {
        matches!(self, PeriodStatus::Draft | PeriodStatus::Processing)
    }

    /// Returns true if the status machine allows moving from `self` to `next`.
    ///
    /// `DRAFT → PROCESSING → (APPROVED | LOCKED | COMPLETED)`, with
    /// `PROCESSING → PROCESSING` for recomputation and
    /// `APPROVED → LOCKED → COMPLETED` for finalisation.
    ///
    /// # Example
    ///
    /// ```
    /// use lao_payroll_engine::models::PeriodStatus;
    ///
    /// assert!(PeriodStatus::Draft.can_transition_to(PeriodStatus::Processing));
    /// assert!(!PeriodStatus::Draft.can_transition_to(PeriodStatus::Approved));
    /// assert!(!PeriodStatus::Locked.can_transition_to(PeriodStatus::Processing));
    /// ```
    pub fn can_transition_to(self, next: PeriodStatus) -> bool {
        use PeriodStatus::*;
        matches!(
            (self, next),
            (Draft, Processing)
                | (Processing, Processing)
                | (Processing, Approved)
                | (Processing, Locked)
                | (Processing, Completed)
                | (Approved, Locked)
                | (Approved, Completed)
                | (Locked, Completed)
        )
    }
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodStatus::Draft => write!(f, "DRAFT"),
            PeriodStatus::Processing => write!(f, "PROCESSING"),
            PeriodStatus::Approved => write!(f, "APPROVED"),
            PeriodStatus::Locked => write!(f, "LOCKED"),
            PeriodStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// One payroll cycle, typically a calendar month.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::models::{PayrollPeriod, PeriodStatus};
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod {
///     id: "2026-01".to_string(),
///     year: 2026,
///     month: 1,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     status: PeriodStatus::Draft,
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Unique identifier of the period.
    pub id: String,
    /// Calendar year of the period.
    pub year: i32,
    /// Calendar month of the period (1-12).
    pub month: u32,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Current lifecycle status.
    pub status: PeriodStatus,
}

impl PayrollPeriod {
    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Fails with [`EngineError::PeriodNotRunnable`] unless the period may be computed.
    pub fn ensure_runnable(&self) -> EngineResult<()> {
        if self.status.is_runnable() {
            Ok(())
        } else {
            Err(EngineError::PeriodNotRunnable {
                period_id: self.id.clone(),
                status: self.status,
            })
        }
    }

    /// Moves the period to `next`, enforcing the status machine.
    pub fn transition_to(&mut self, next: PeriodStatus) -> EngineResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(EngineError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
