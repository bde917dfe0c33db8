//! Attendance record model.
//!
//! One record exists per employee per calendar date, carrying the raw
//! clock-in and clock-out timestamps captured by the time clock.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Raw attendance for one employee on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date the record is filed under.
    pub date: NaiveDate,
    /// Clock-in timestamp, if captured.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// Clock-out timestamp, if captured.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

impl AttendanceRecord {
    /// Returns the worked interval when both timestamps exist and clock-out is after clock-in.
    ///
    /// # Examples
    ///
    /// ```
    /// use lao_payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     clock_in: Some(NaiveDateTime::parse_from_str("2026-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     clock_out: None,
    /// };
    /// assert!(record.worked_interval().is_none());
    /// ```
    pub fn worked_interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.clock_in, self.clock_out) {
            (Some(clock_in), Some(clock_out)) if clock_out > clock_in => Some((clock_in, clock_out)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn record(clock_in: Option<NaiveDateTime>, clock_out: Option<NaiveDateTime>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            clock_in,
            clock_out,
        }
    }

    #[test]
    fn test_complete_record_has_interval() {
        let start = make_datetime("2026-01-15", "08:00:00");
        let end = make_datetime("2026-01-15", "17:30:00");
        assert_eq!(record(Some(start), Some(end)).worked_interval(), Some((start, end)));
    }

    #[test]
    fn test_overnight_record_has_interval() {
        let start = make_datetime("2026-01-15", "22:00:00");
        let end = make_datetime("2026-01-16", "06:00:00");
        assert!(record(Some(start), Some(end)).worked_interval().is_some());
    }

    #[test]
    fn test_missing_timestamps_have_no_interval() {
        let start = make_datetime("2026-01-15", "08:00:00");
        assert!(record(None, Some(start)).worked_interval().is_none());
        assert!(record(Some(start), None).worked_interval().is_none());
        assert!(record(None, None).worked_interval().is_none());
    }

    #[test]
    fn test_clock_out_not_after_clock_in_has_no_interval() {
        let start = make_datetime("2026-01-15", "17:00:00");
        let end = make_datetime("2026-01-15", "08:00:00");
        assert!(record(Some(start), Some(end)).worked_interval().is_none());
        assert!(record(Some(start), Some(start)).worked_interval().is_none());
    }

    #[test]
    fn test_deserialize_record_with_missing_clock_out() {
        let json = r#"{
            "employee_id": "emp_001",
            "date": "2026-01-15",
            "clock_in": "2026-01-15T08:00:00"
        }"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.clock_in.is_some());
        assert!(record.clock_out.is_none());
    }
}
