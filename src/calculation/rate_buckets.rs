//! Overtime rate buckets.
//!
//! A bucket is a time-of-day window anchored to an attendance date, given as
//! minute offsets from that date's midnight, with the multiplier paid for
//! hours worked inside it. An offset past 24:00 reaches into the next day.
//! The bucket tables differ only by day class.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::config::OvertimeMultipliers;

use super::day_classification::DayClass;

const MINUTES_PER_HOUR: i64 = 60;

/// 06:00, the start of day-time rates.
pub const DAY_START_OFFSET: i64 = 6 * MINUTES_PER_HOUR;
/// 16:00, the start of evening rates on fully payable days.
pub const EVENING_START_OFFSET: i64 = 16 * MINUTES_PER_HOUR;
/// 22:00, the start of night rates.
pub const NIGHT_START_OFFSET: i64 = 22 * MINUTES_PER_HOUR;
/// 06:00 on the following day, the end of night rates.
pub const NIGHT_END_OFFSET: i64 = 30 * MINUTES_PER_HOUR;

/// A time window with an overtime multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateBucket {
    /// Short name reported on overtime lines.
    pub name: &'static str,
    /// Window start, in minutes after the anchor date's midnight.
    pub start_offset: i64,
    /// Window end, in minutes after the anchor date's midnight.
    pub end_offset: i64,
    /// Pay multiplier for hours in the window.
    pub multiplier: Decimal,
}

impl RateBucket {
    /// Returns the bucket's `[start, end)` window on the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use lao_payroll_engine::calculation::{RateBucket, NIGHT_START_OFFSET, NIGHT_END_OFFSET};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let night = RateBucket {
    ///     name: "night",
    ///     start_offset: NIGHT_START_OFFSET,
    ///     end_offset: NIGHT_END_OFFSET,
    ///     multiplier: Decimal::new(2, 0),
    /// };
    /// let (start, end) = night.window(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
    /// assert_eq!(start.to_string(), "2026-01-12 22:00:00");
    /// assert_eq!(end.to_string(), "2026-01-13 06:00:00");
    /// ```
    pub fn window(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let midnight = date.and_hms_opt(0, 0, 0).expect("Valid midnight time");
        (
            midnight + Duration::minutes(self.start_offset),
            midnight + Duration::minutes(self.end_offset),
        )
    }
}

/// Minutes after midnight of a clock time, ignoring seconds.
pub fn minute_offset(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) / 60
}

fn bucket(name: &'static str, start_offset: i64, end_offset: i64, multiplier: Decimal) -> RateBucket {
    RateBucket {
        name,
        start_offset,
        end_offset,
        multiplier,
    }
}

/// Builds the rate buckets for a classified day.
///
/// On a holiday or non-scheduled day the buckets cover the whole clock:
///
/// | Window | Multiplier |
/// |---|---|
/// | 06:00-16:00 | `holiday_day` (×2.5) |
/// | 16:00-22:00 | `holiday_evening` (×3.0) |
/// | 22:00-06:00 next day | `holiday_night` (×3.5) |
/// | 00:00-06:00 | `holiday_night` (×3.5) |
///
/// On a normal workday only the time outside the day's window is covered:
///
/// | Window | Multiplier |
/// |---|---|
/// | day end-22:00 | `workday_extended` (×1.5) |
/// | 22:00-06:00 next day | `workday_night` (×2.0) |
/// | 00:00-06:00 | `workday_night` (×2.0) |
/// | 06:00-day start | `workday_extended` (×1.5) |
pub fn rate_buckets(class: &DayClass, multipliers: &OvertimeMultipliers) -> Vec<RateBucket> {
    match class {
        DayClass::Holiday | DayClass::NonScheduled => vec![
            bucket("holiday_day", DAY_START_OFFSET, EVENING_START_OFFSET, multipliers.holiday_day),
            bucket(
                "holiday_evening",
                EVENING_START_OFFSET,
                NIGHT_START_OFFSET,
                multipliers.holiday_evening,
            ),
            bucket("holiday_night", NIGHT_START_OFFSET, NIGHT_END_OFFSET, multipliers.holiday_night),
            bucket("holiday_early_morning", 0, DAY_START_OFFSET, multipliers.holiday_night),
        ],
        DayClass::NormalWorkday { day_start, day_end } => vec![
            bucket(
                "after_hours",
                minute_offset(*day_end),
                NIGHT_START_OFFSET,
                multipliers.workday_extended,
            ),
            bucket("night", NIGHT_START_OFFSET, NIGHT_END_OFFSET, multipliers.workday_night),
            bucket("early_morning", 0, DAY_START_OFFSET, multipliers.workday_night),
            bucket(
                "before_hours",
                DAY_START_OFFSET,
                minute_offset(*day_start),
                multipliers.workday_extended,
            ),
        ],
    }
}
