//! Work schedule model.
//!
//! The work schedule decides which calendar days are ordinary working days,
//! the normal working window on those days, and the figures used to turn a
//! monthly salary into an hourly rate.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard monthly work days used when no usable schedule figure exists.
pub const DEFAULT_MONTHLY_WORK_DAYS: Decimal = Decimal::from_parts(26, 0, 0, false, 0);

/// Standard daily work hours used when no usable schedule figure exists.
pub const DEFAULT_DAILY_WORK_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// How Saturdays are worked under a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaturdayPolicy {
    /// Saturdays are never worked.
    #[default]
    None,
    /// Saturdays are worked within the Saturday start/end times.
    Half,
    /// Saturdays are worked within the normal start/end times.
    Full,
}

fn default_true() -> bool {
    true
}

/// The organisation's work schedule.
///
/// At most one schedule is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Human-readable name of the schedule.
    pub name: String,
    /// Whether this schedule is the active one.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Monday is a working day.
    #[serde(default = "default_true")]
    pub monday: bool,
    /// Tuesday is a working day.
    #[serde(default = "default_true")]
    pub tuesday: bool,
    /// Wednesday is a working day.
    #[serde(default = "default_true")]
    pub wednesday: bool,
    /// Thursday is a working day.
    #[serde(default = "default_true")]
    pub thursday: bool,
    /// Friday is a working day.
    #[serde(default = "default_true")]
    pub friday: bool,
    /// Saturday may be a working day, subject to the Saturday policy.
    #[serde(default)]
    pub saturday: bool,
    /// Start of the normal working window.
    pub work_start: NaiveTime,
    /// End of the normal working window.
    pub work_end: NaiveTime,
    /// How working Saturdays are worked.
    #[serde(default)]
    pub saturday_policy: SaturdayPolicy,
    /// Start of the working window on a half-day Saturday.
    #[serde(default)]
    pub saturday_start: Option<NaiveTime>,
    /// End of the working window on a half-day Saturday.
    #[serde(default)]
    pub saturday_end: Option<NaiveTime>,
    /// Saturdays of the month (1-based) the policy applies to; empty means every Saturday.
    #[serde(default)]
    pub saturday_weeks: Vec<u32>,
    /// Ordinary hours in one working day.
    pub daily_work_hours: Decimal,
    /// Standard working days in one month, used for the hourly rate.
    pub monthly_standard_days: Decimal,
}

impl Default for WorkSchedule {
    /// Monday to Friday, 08:00 to 17:00, 8 hours a day, 26 standard days.
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            is_active: true,
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
            work_start: NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
            work_end: NaiveTime::from_hms_opt(17, 0, 0).expect("valid time"),
            saturday_policy: SaturdayPolicy::None,
            saturday_start: None,
            saturday_end: None,
            saturday_weeks: Vec::new(),
            daily_work_hours: DEFAULT_DAILY_WORK_HOURS,
            monthly_standard_days: DEFAULT_MONTHLY_WORK_DAYS,
        }
    }
}

/// Returns which Saturday (or other weekday) of the month a date is, starting at 1.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::models::week_of_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()), 1);
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()), 3);
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()), 5);
/// ```
pub fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

impl WorkSchedule {
    /// Returns true if the given date is a scheduled working day.
    ///
    /// Sunday is never worked. Saturday is worked only when enabled, the
    /// policy is not `None`, and the date's week of month is covered.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.is_working_saturday(date),
            Weekday::Sun => false,
        }
    }

    fn is_working_saturday(&self, date: NaiveDate) -> bool {
        if !self.saturday || self.saturday_policy == SaturdayPolicy::None {
            return false;
        }
        self.saturday_weeks.is_empty() || self.saturday_weeks.contains(&week_of_month(date))
    }

    /// Returns the normal working window `(start, end)` for a date.
    ///
    /// On a half-day Saturday this is the Saturday window (each bound falls
    /// back to the normal one when unset); on every other day it is the
    /// normal window.
    pub fn work_window(&self, date: NaiveDate) -> (NaiveTime, NaiveTime) {
        if date.weekday() == Weekday::Sat && self.saturday_policy == SaturdayPolicy::Half {
            (
                self.saturday_start.unwrap_or(self.work_start),
                self.saturday_end.unwrap_or(self.work_end),
            )
        } else {
            (self.work_start, self.work_end)
        }
    }

    /// Monthly standard work days, falling back to 26 when not positive.
    pub fn standard_work_days(&self) -> Decimal {
        if self.monthly_standard_days > Decimal::ZERO {
            self.monthly_standard_days
        } else {
            DEFAULT_MONTHLY_WORK_DAYS
        }
    }

    /// Daily work hours, falling back to 8 when not positive.
    pub fn standard_daily_hours(&self) -> Decimal {
        if self.daily_work_hours > Decimal::ZERO {
            self.daily_work_hours
        } else {
            DEFAULT_DAILY_WORK_HOURS
        }
    }
}
