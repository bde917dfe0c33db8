//! Attendance day classification.
//!
//! Every attendance date is classified once, and the classification alone
//! decides which rate buckets apply and whether normal hours are deducted.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, WorkSchedule};

/// How a calendar day is treated for overtime.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::calculation::{DayClass, classify_day};
/// use lao_payroll_engine::models::WorkSchedule;
/// use chrono::NaiveDate;
///
/// // 2026-01-18 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(classify_day(sunday, &WorkSchedule::default(), &[]), DayClass::NonScheduled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// An active public holiday; every worked hour is overtime.
    Holiday,
    /// A day the schedule does not designate as worked; every worked hour is overtime.
    NonScheduled,
    /// A scheduled working day; only hours outside the window are overtime.
    NormalWorkday {
        /// Start of the day's normal working window.
        day_start: NaiveTime,
        /// End of the day's normal working window.
        day_end: NaiveTime,
    },
}

impl DayClass {
    /// Returns true if every worked hour on the day is payable as overtime.
    pub fn is_fully_payable(&self) -> bool {
        matches!(self, DayClass::Holiday | DayClass::NonScheduled)
    }
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Holiday => write!(f, "Holiday"),
            DayClass::NonScheduled => write!(f, "Non-scheduled"),
            DayClass::NormalWorkday { day_start, day_end } => {
                write!(f, "Workday {}-{}", day_start.format("%H:%M"), day_end.format("%H:%M"))
            }
        }
    }
}

/// Classifies a date against the work schedule and the holiday calendar.
///
/// Holidays take precedence over the schedule, so a holiday falling on a
/// scheduled weekday is still a [`DayClass::Holiday`].
pub fn classify_day(date: NaiveDate, schedule: &WorkSchedule, holidays: &[Holiday]) -> DayClass {
    if holidays.iter().any(|h| h.applies_on(date)) {
        return DayClass::Holiday;
    }

    if !schedule.is_working_day(date) {
        return DayClass::NonScheduled;
    }

    let (day_start, day_end) = schedule.work_window(date);
    DayClass::NormalWorkday { day_start, day_end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SaturdayPolicy;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn holiday(date: &str, recurring: bool) -> Holiday {
        Holiday {
            date: make_date(date),
            name: "Holiday".to_string(),
            recurring,
            is_active: true,
        }
    }

    fn half_day_saturdays(weeks: Vec<u32>) -> WorkSchedule {
        WorkSchedule {
            saturday: true,
            saturday_policy: SaturdayPolicy::Half,
            saturday_start: Some(make_time("08:00")),
            saturday_end: Some(make_time("12:00")),
            saturday_weeks: weeks,
            ..WorkSchedule::default()
        }
    }

    #[test]
    fn test_weekday_is_normal_workday() {
        // 2026-01-12 is a Monday
        let class = classify_day(make_date("2026-01-12"), &WorkSchedule::default(), &[]);
        assert_eq!(
            class,
            DayClass::NormalWorkday {
                day_start: make_time("08:00"),
                day_end: make_time("17:00"),
            }
        );
        assert!(!class.is_fully_payable());
    }

    #[test]
    fn test_sunday_is_non_scheduled() {
        let class = classify_day(make_date("2026-01-18"), &WorkSchedule::default(), &[]);
        assert_eq!(class, DayClass::NonScheduled);
        assert!(class.is_fully_payable());
    }

    #[test]
    fn test_saturday_without_policy_is_non_scheduled() {
        let class = classify_day(make_date("2026-01-17"), &WorkSchedule::default(), &[]);
        assert_eq!(class, DayClass::NonScheduled);
    }

    #[test]
    fn test_half_day_saturday_uses_saturday_window() {
        let class = classify_day(make_date("2026-01-17"), &half_day_saturdays(vec![]), &[]);
        assert_eq!(
            class,
            DayClass::NormalWorkday {
                day_start: make_time("08:00"),
                day_end: make_time("12:00"),
            }
        );
    }

    #[test]
    fn test_saturday_outside_configured_weeks_is_non_scheduled() {
        // 2026-01-17 is the third Saturday; only the 1st and 3rd are worked here
        let schedule = half_day_saturdays(vec![1, 3]);
        assert!(matches!(
            classify_day(make_date("2026-01-17"), &schedule, &[]),
            DayClass::NormalWorkday { .. }
        ));
        assert_eq!(
            classify_day(make_date("2026-01-10"), &schedule, &[]),
            DayClass::NonScheduled
        );
    }

    #[test]
    fn test_holiday_overrides_scheduled_weekday() {
        let holidays = vec![holiday("2026-01-01", false)];
        assert_eq!(
            classify_day(make_date("2026-01-01"), &WorkSchedule::default(), &holidays),
            DayClass::Holiday
        );
    }

    #[test]
    fn test_recurring_holiday_matches_other_years() {
        let holidays = vec![holiday("2020-12-02", true)];
        // 2026-12-02 is a Wednesday
        assert_eq!(
            classify_day(make_date("2026-12-02"), &WorkSchedule::default(), &holidays),
            DayClass::Holiday
        );
    }

    #[test]
    fn test_inactive_holiday_is_ignored() {
        let mut inactive = holiday("2026-01-12", false);
        inactive.is_active = false;
        assert!(matches!(
            classify_day(make_date("2026-01-12"), &WorkSchedule::default(), &[inactive]),
            DayClass::NormalWorkday { .. }
        ));
    }

    #[test]
    fn test_display() {
        let class = DayClass::NormalWorkday {
            day_start: make_time("08:00"),
            day_end: make_time("17:00"),
        };
        assert_eq!(format!("{}", class), "Workday 08:00-17:00");
        assert_eq!(format!("{}", DayClass::Holiday), "Holiday");
    }
}
