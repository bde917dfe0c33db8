//! In-memory implementation of every collaborator store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::{ConfigurationSnapshot, PayrollSettings};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, ConversionRate, Employee, Holiday, PayrollAdjustment, PayrollPeriod,
    PeriodStatus, SalaryCalculationResult, TaxBracket, WorkSchedule,
};

use super::{
    AttendanceStore, ConfigurationSource, ConversionRateStore, EmployeeDirectory, HolidayCalendar,
    PayrollStore,
};

#[derive(Debug, Default)]
struct MemoryState {
    settings: PayrollSettings,
    tax_brackets: Vec<TaxBracket>,
    work_schedules: Vec<WorkSchedule>,
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    holidays: Vec<Holiday>,
    conversion_rates: Vec<ConversionRate>,
    periods: HashMap<String, PayrollPeriod>,
    adjustments: Vec<PayrollAdjustment>,
    results: HashMap<String, Vec<SalaryCalculationResult>>,
}

/// A store holding all payroll data in memory behind one lock.
///
/// Writers take the lock exclusively, so [`PayrollStore::commit_run`] is
/// observed by readers either entirely or not at all.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::models::{PayrollPeriod, PeriodStatus};
/// use lao_payroll_engine::store::{InMemoryPayrollStore, PayrollStore};
/// use chrono::NaiveDate;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryPayrollStore::new();
/// store.add_period(PayrollPeriod {
///     id: "2026-01".to_string(),
///     year: 2026,
///     month: 1,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     status: PeriodStatus::Draft,
/// }).await;
///
/// let period = store.find_period("2026-01").await.unwrap().unwrap();
/// assert_eq!(period.status, PeriodStatus::Draft);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPayrollStore {
    state: RwLock<MemoryState>,
}

impl InMemoryPayrollStore {
    /// Creates an empty store with default settings, no tax brackets and no schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the payroll settings.
    pub async fn set_settings(&self, settings: PayrollSettings) {
        self.state.write().await.settings = settings;
    }

    /// Replaces the tax bracket table.
    pub async fn set_tax_brackets(&self, brackets: Vec<TaxBracket>) {
        self.state.write().await.tax_brackets = brackets;
    }

    /// Adds a work schedule.
    pub async fn add_work_schedule(&self, schedule: WorkSchedule) {
        self.state.write().await.work_schedules.push(schedule);
    }

    /// Adds or replaces an employee.
    pub async fn add_employee(&self, employee: Employee) {
        let mut state = self.state.write().await;
        state.employees.retain(|e| e.id != employee.id);
        state.employees.push(employee);
    }

    /// Adds an attendance record.
    pub async fn add_attendance(&self, record: AttendanceRecord) {
        self.state.write().await.attendance.push(record);
    }

    /// Adds a holiday.
    pub async fn add_holiday(&self, holiday: Holiday) {
        self.state.write().await.holidays.push(holiday);
    }

    /// Adds a conversion rate row.
    pub async fn add_conversion_rate(&self, rate: ConversionRate) {
        self.state.write().await.conversion_rates.push(rate);
    }

    /// Adds or replaces a payroll period.
    pub async fn add_period(&self, period: PayrollPeriod) {
        self.state
            .write()
            .await
            .periods
            .insert(period.id.clone(), period);
    }

    /// Adds a payroll adjustment.
    pub async fn add_adjustment(&self, adjustment: PayrollAdjustment) {
        self.state.write().await.adjustments.push(adjustment);
    }
}

#[async_trait]
impl ConfigurationSource for InMemoryPayrollStore {
    async fn load_snapshot(&self) -> EngineResult<ConfigurationSnapshot> {
        let state = self.state.read().await;
        Ok(ConfigurationSnapshot::new(
            state.settings.clone(),
            state.tax_brackets.clone(),
            state.work_schedules.clone(),
        ))
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryPayrollStore {
    async fn active_employees(&self) -> EngineResult<Vec<Employee>> {
        let state = self.state.read().await;
        Ok(state.employees.iter().filter(|e| e.is_active).cloned().collect())
    }

    async fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        let state = self.state.read().await;
        Ok(state.employees.iter().find(|e| e.id == employee_id).cloned())
    }
}

#[async_trait]
impl AttendanceStore for InMemoryPayrollStore {
    async fn attendance_between(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let state = self.state.read().await;
        let mut records: Vec<AttendanceRecord> = state
            .attendance
            .iter()
            .filter(|r| r.employee_id == employee_id && r.date >= start && r.date <= end)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}

#[async_trait]
impl HolidayCalendar for InMemoryPayrollStore {
    async fn holidays_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Holiday>> {
        let state = self.state.read().await;
        Ok(state
            .holidays
            .iter()
            .filter(|h| h.falls_between(start, end))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ConversionRateStore for InMemoryPayrollStore {
    async fn rates_for_pair(&self, from: &str, to: &str) -> EngineResult<Vec<ConversionRate>> {
        let state = self.state.read().await;
        Ok(state
            .conversion_rates
            .iter()
            .filter(|r| r.is_pair(from, to))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PayrollStore for InMemoryPayrollStore {
    async fn find_period(&self, period_id: &str) -> EngineResult<Option<PayrollPeriod>> {
        Ok(self.state.read().await.periods.get(period_id).cloned())
    }

    async fn adjustments_for(
        &self,
        period_id: &str,
        employee_id: &str,
    ) -> EngineResult<Vec<PayrollAdjustment>> {
        let state = self.state.read().await;
        Ok(state
            .adjustments
            .iter()
            .filter(|a| a.period_id == period_id && a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn results_for(&self, period_id: &str) -> EngineResult<Vec<SalaryCalculationResult>> {
        let state = self.state.read().await;
        Ok(state.results.get(period_id).cloned().unwrap_or_default())
    }

    async fn commit_run(
        &self,
        period_id: &str,
        results: Vec<SalaryCalculationResult>,
        status: PeriodStatus,
    ) -> EngineResult<()> {
        let mut state = self.state.write().await;

        let period = state
            .periods
            .get_mut(period_id)
            .ok_or_else(|| EngineError::PeriodNotFound {
                period_id: period_id.to_string(),
            })?;
        period.transition_to(status)?;

        debug!(period_id = %period_id, result_count = results.len(), status = %status, "Committed payroll run");
        state.results.insert(period_id.to_string(), results);
        Ok(())
    }
}
