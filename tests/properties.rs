//! Property-based tests for the payroll calculators.
//!
//! Uses proptest to check NSSF capping, progressive tax monotonicity,
//! currency identity, overtime bounds and the additive salary breakdown
//! across wide ranges of inputs.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use lao_payroll_engine::calculation::{
    CurrencyConverter, calculate_income_tax, calculate_nssf, calculate_overtime, compose_salary,
};
use lao_payroll_engine::config::{ConfigLoader, ConfigurationSnapshot, NssfSettings};
use lao_payroll_engine::models::{AdjustmentKind, AttendanceRecord, PayrollAdjustment};
use lao_payroll_engine::store::InMemoryPayrollStore;

fn lao_snapshot() -> ConfigurationSnapshot {
    ConfigLoader::load("./config/lao")
        .expect("Failed to load config")
        .snapshot()
        .clone()
}

fn january_2026(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
}

fn at_minute(date: NaiveDate, minute: i64) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(minute)
}

fn attendance(date: NaiveDate, clock_in: NaiveDateTime, clock_out: NaiveDateTime) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: "emp_001".to_string(),
        date,
        clock_in: Some(clock_in),
        clock_out: Some(clock_out),
    }
}

proptest! {
    /// Property: the NSSF base is the gross income up to the ceiling, and the ceiling above it
    #[test]
    fn test_nssf_base_is_capped_at_ceiling(gross in 0u64..50_000_000u64) {
        let settings = NssfSettings::default();
        let gross = Decimal::from(gross);

        let nssf = calculate_nssf(gross, &settings);

        if gross <= settings.ceiling {
            prop_assert_eq!(nssf.base, gross);
        } else {
            prop_assert_eq!(nssf.base, settings.ceiling);
        }
        prop_assert!(nssf.employee_amount <= nssf.employer_amount);
    }

    /// Property: progressive tax never decreases as taxable income grows
    #[test]
    fn test_tax_is_monotonic(a in 0u64..100_000_000u64, b in 0u64..100_000_000u64) {
        let snapshot = lao_snapshot();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_tax = calculate_income_tax(Decimal::from(low), snapshot.tax_brackets()).tax;
        let high_tax = calculate_income_tax(Decimal::from(high), snapshot.tax_brackets()).tax;

        prop_assert!(low_tax <= high_tax);
        prop_assert!(low_tax >= Decimal::ZERO);
    }

    /// Property: income inside the zero-rate first bracket is untaxed
    #[test]
    fn test_zero_rate_bracket_is_untaxed(income in 0u64..=1_300_000u64) {
        let snapshot = lao_snapshot();
        let result = calculate_income_tax(Decimal::from(income), snapshot.tax_brackets());
        prop_assert_eq!(result.tax, Decimal::ZERO);
    }

    /// Property: bracket lines add up to the tax and the taxed income
    #[test]
    fn test_tax_lines_reconcile(income in 0u64..100_000_000u64) {
        let snapshot = lao_snapshot();
        let income = Decimal::from(income);
        let result = calculate_income_tax(income, snapshot.tax_brackets());

        let taxed: Decimal = result.lines.iter().map(|l| l.taxed_amount).sum();
        let tax: Decimal = result.lines.iter().map(|l| l.tax).sum();
        prop_assert_eq!(taxed, income);
        prop_assert_eq!(tax, result.tax);
    }

    /// Property: converting a currency into itself is 1 on any date
    #[test]
    fn test_same_currency_rate_is_one(days in 0i64..20_000i64, code in "[A-Z]{3}") {
        let snapshot = ConfigurationSnapshot::default();
        let store = InMemoryPayrollStore::new();
        let as_of = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(days);

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let rate = runtime
            .block_on(CurrencyConverter::new(&snapshot, &store).rate(&code, &code.to_lowercase(), as_of))
            .unwrap();

        prop_assert_eq!(rate, Decimal::ONE);
    }

    /// Property: attendance inside the normal window on a weekday earns no overtime
    #[test]
    fn test_within_hours_attendance_has_no_overtime(
        day in 1u32..=31u32,
        start in 480i64..1020i64,
        length in 1i64..540i64,
    ) {
        let date = january_2026(day);
        prop_assume!(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
        let end = (start + length).min(1020);
        prop_assume!(end > start);

        let record = attendance(date, at_minute(date, start), at_minute(date, end));
        let result = calculate_overtime(&[record], &[], Decimal::from(8_000_000), &lao_snapshot());

        prop_assert_eq!(result.total_pay, Decimal::ZERO);
        prop_assert!(result.lines.is_empty());
    }

    /// Property: every worked minute on a Sunday is payable
    #[test]
    fn test_sunday_hours_are_fully_payable(start in 0i64..1440i64, length in 1i64..720i64) {
        // 2026-01-18 is a Sunday
        let date = january_2026(18);
        // Buckets anchored to the Sunday end at 06:00 on Monday
        prop_assume!(start + length <= 1800);
        let record = attendance(date, at_minute(date, start), at_minute(date, start + length));

        let result = calculate_overtime(&[record], &[], Decimal::from(5_200_000), &lao_snapshot());
        let payable: Decimal = result.lines.iter().map(|l| l.hours).sum();

        prop_assert_eq!((payable * Decimal::from(60)).round(), Decimal::from(length));
    }

    /// Property: the salary breakdown is additive for any adjustments
    #[test]
    fn test_salary_breakdown_is_additive(
        base in 0u64..100_000_000u64,
        earning in 0u64..5_000_000u64,
        earning_taxable in any::<bool>(),
        bonus in 0u64..5_000_000u64,
        deduction in 0u64..5_000_000u64,
        dependents in 0u32..6u32,
    ) {
        let adjustment = |kind, amount: u64, taxable| PayrollAdjustment {
            employee_id: "emp_001".to_string(),
            period_id: "2026-01".to_string(),
            name: "Adjustment".to_string(),
            kind,
            amount: Decimal::from(amount),
            taxable,
        };
        let adjustments = vec![
            adjustment(AdjustmentKind::Earning, earning, earning_taxable),
            adjustment(AdjustmentKind::Bonus, bonus, false),
            adjustment(AdjustmentKind::Deduction, deduction, false),
        ];

        let b = compose_salary(
            Decimal::from(base),
            Decimal::ZERO,
            &adjustments,
            dependents,
            &lao_snapshot(),
        )
        .breakdown;

        prop_assert_eq!(b.gross_income, b.base_salary + b.overtime_pay + b.taxable_allowances + b.bonus);
        prop_assert_eq!(
            b.net_salary,
            b.gross_income - b.nssf_employee - b.income_tax + b.non_taxable_allowances - b.other_deductions
        );
        prop_assert!(b.taxable_income >= Decimal::ZERO);
        prop_assert!(b.nssf_base <= b.gross_income);
    }
}
