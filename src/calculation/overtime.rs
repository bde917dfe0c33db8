//! Overtime pay from raw attendance.
//!
//! Each attendance day is classified, its rate buckets are built, and the
//! worked interval is intersected with every bucket independently. On a
//! normal workday the part of an overlap inside the normal working window is
//! regular pay and is deducted; on holidays and non-scheduled days the whole
//! overlap is payable.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ConfigurationSnapshot;
use crate::models::{AttendanceRecord, Holiday, OvertimeLine};

use super::day_classification::{DayClass, classify_day};
use super::rate_buckets::rate_buckets;
use super::rounding::round_money;

/// The result of an overtime calculation over a set of attendance records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Total overtime pay, rounded to 2 decimals.
    pub total_pay: Decimal,
    /// Total payable overtime hours, rounded to 2 decimals.
    pub total_hours: Decimal,
    /// The hourly rate the hours were priced at.
    pub hourly_rate: Decimal,
    /// One line per date and bucket with payable hours.
    pub lines: Vec<OvertimeLine>,
}

/// Derives the hourly rate from a monthly salary and the active schedule.
///
/// `base_salary / monthly standard days / daily hours`, both figures falling
/// back to 26 and 8 when the schedule does not configure a positive value.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::calculation::hourly_rate;
/// use lao_payroll_engine::config::ConfigurationSnapshot;
/// use rust_decimal::Decimal;
///
/// let snapshot = ConfigurationSnapshot::default();
/// assert_eq!(hourly_rate(Decimal::new(5_200_000, 0), &snapshot), Decimal::new(25_000, 0));
/// ```
pub fn hourly_rate(base_salary: Decimal, snapshot: &ConfigurationSnapshot) -> Decimal {
    let schedule = snapshot.work_schedule();
    base_salary / schedule.standard_work_days() / schedule.standard_daily_hours()
}

const SECONDS_PER_HOUR: i64 = 3600;

/// Length of the intersection of two intervals, in seconds (zero if disjoint).
fn overlap_seconds(
    a: (NaiveDateTime, NaiveDateTime),
    b: (NaiveDateTime, NaiveDateTime),
) -> i64 {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    if end > start {
        (end - start).num_seconds()
    } else {
        0
    }
}

fn seconds_to_hours(seconds: i64) -> Decimal {
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
}

/// Calculates overtime pay for one employee's attendance records.
///
/// Records without both timestamps, or with clock-out not after clock-in,
/// are skipped. `base_salary` must already be in the local currency.
///
/// # Examples
///
/// ```
/// use lao_payroll_engine::calculation::calculate_overtime;
/// use lao_payroll_engine::config::ConfigurationSnapshot;
/// use lao_payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// // Monday 2026-01-12, 06:00 to 19:00 against an 08:00-17:00 day
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     clock_in: Some(NaiveDateTime::parse_from_str("2026-01-12 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     clock_out: Some(NaiveDateTime::parse_from_str("2026-01-12 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
/// };
///
/// let result = calculate_overtime(
///     &[record],
///     &[],
///     Decimal::new(5_200_000, 0),
///     &ConfigurationSnapshot::default(),
/// );
/// // 2h before and 2h after the window, at 25,000/h × 1.5
/// assert_eq!(result.total_pay, Decimal::new(150_000, 0));
/// assert_eq!(result.total_hours, Decimal::new(4, 0));
/// ```
pub fn calculate_overtime(
    attendance: &[AttendanceRecord],
    holidays: &[Holiday],
    base_salary: Decimal,
    snapshot: &ConfigurationSnapshot,
) -> OvertimeResult {
    let schedule = snapshot.work_schedule();
    let multipliers = &snapshot.settings().overtime;
    let rate = hourly_rate(base_salary, snapshot);

    let mut lines = Vec::new();
    let mut total_pay = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;

    for record in attendance {
        let Some(worked) = record.worked_interval() else {
            debug!(
                employee_id = %record.employee_id,
                date = %record.date,
                "Skipping incomplete attendance record"
            );
            continue;
        };

        let class = classify_day(record.date, schedule, holidays);
        let normal_window = normal_window(record.date, &class);

        for bucket in rate_buckets(&class, multipliers) {
            let bucket_window = bucket.window(record.date);
            let overlap = overlap_seconds(worked, bucket_window);
            if overlap == 0 {
                continue;
            }

            let deducted = match normal_window {
                Some(window) => {
                    let overlap_window = (worked.0.max(bucket_window.0), worked.1.min(bucket_window.1));
                    overlap_seconds(overlap_window, window)
                }
                None => 0,
            };

            let payable = (overlap - deducted).max(0);
            if payable == 0 {
                continue;
            }

            let hours = seconds_to_hours(payable);
            let amount = hours * rate * bucket.multiplier;
            total_pay += amount;
            total_hours += hours;

            lines.push(OvertimeLine {
                date: record.date,
                bucket: bucket.name.to_string(),
                hours,
                hourly_rate: rate,
                multiplier: bucket.multiplier,
                amount,
            });
        }
    }

    OvertimeResult {
        total_pay: round_money(total_pay),
        total_hours: total_hours.round_dp(2),
        hourly_rate: rate,
        lines,
    }
}

/// The normal working window on a workday; `None` when every hour is payable.
fn normal_window(date: NaiveDate, class: &DayClass) -> Option<(NaiveDateTime, NaiveDateTime)> {
    match class {
        DayClass::NormalWorkday { day_start, day_end } => {
            Some((date.and_time(*day_start), date.and_time(*day_end)))
        }
        DayClass::Holiday | DayClass::NonScheduled => None,
    }
}
