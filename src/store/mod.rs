//! Collaborator stores the engine reads from and writes to.
//!
//! Each concern is a small async trait so deployments can back them with
//! whatever persistence they use. [`InMemoryPayrollStore`] implements all of
//! them for tests, previews and embedding.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::config::ConfigurationSnapshot;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, ConversionRate, Employee, Holiday, PayrollAdjustment, PayrollPeriod,
    PeriodStatus, SalaryCalculationResult,
};

pub use memory::InMemoryPayrollStore;

/// Supplies the configuration a run computes against.
#[async_trait]
pub trait ConfigurationSource: Send + Sync {
    /// Builds a snapshot of the current configuration.
    async fn load_snapshot(&self) -> EngineResult<ConfigurationSnapshot>;
}

/// The HR employee directory.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Returns every employee that takes part in payroll runs.
    async fn active_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Finds one employee by id, active or not.
    async fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>>;
}

/// Raw time-clock attendance.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Returns an employee's attendance records dated within `[start, end]`.
    async fn attendance_between(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;
}

/// The public holiday calendar.
#[async_trait]
pub trait HolidayCalendar: Send + Sync {
    /// Returns active holidays falling within `[start, end]`, recurring ones by month and day.
    async fn holidays_between(&self, start: NaiveDate, end: NaiveDate)
    -> EngineResult<Vec<Holiday>>;
}

/// Historical currency conversion rates.
#[async_trait]
pub trait ConversionRateStore: Send + Sync {
    /// Returns every rate row for the directional pair `from → to`.
    async fn rates_for_pair(&self, from: &str, to: &str) -> EngineResult<Vec<ConversionRate>>;
}

/// Payroll periods, their adjustments and computed results.
#[async_trait]
pub trait PayrollStore: Send + Sync {
    /// Finds a payroll period by id.
    async fn find_period(&self, period_id: &str) -> EngineResult<Option<PayrollPeriod>>;

    /// Returns one employee's adjustments for a period.
    async fn adjustments_for(
        &self,
        period_id: &str,
        employee_id: &str,
    ) -> EngineResult<Vec<PayrollAdjustment>>;

    /// Returns the stored results of a period.
    async fn results_for(&self, period_id: &str) -> EngineResult<Vec<SalaryCalculationResult>>;

    /// Replaces all results of a period and moves it to `status`, as one unit.
    ///
    /// Fails without any effect if the period is missing or the status
    /// machine does not allow the transition.
    async fn commit_run(
        &self,
        period_id: &str,
        results: Vec<SalaryCalculationResult>,
        status: PeriodStatus,
    ) -> EngineResult<()>;
}

/// Every store a payroll run needs, behind one object.
pub trait PayrollDataStore:
    EmployeeDirectory + AttendanceStore + HolidayCalendar + ConversionRateStore + PayrollStore
{
}

impl<T> PayrollDataStore for T where
    T: EmployeeDirectory + AttendanceStore + HolidayCalendar + ConversionRateStore + PayrollStore
{
}
