//! Payroll run orchestration.
//!
//! A run computes every active employee of one payroll period against a
//! single configuration snapshot, then replaces the period's results and
//! moves it to `PROCESSING` in one store commit.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    CurrencyConverter, calculate_overtime, compose_salary, is_same_currency, round_money,
};
use crate::config::ConfigurationSnapshot;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CurrencySettlement, Employee, Holiday, PayrollPeriod, PeriodStatus, SalaryCalculationResult,
};
use crate::store::{ConfigurationSource, PayrollDataStore};

/// Marks a period as being run until dropped.
struct RunGuard<'a> {
    in_flight: &'a Mutex<HashSet<String>>,
    period_id: String,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.period_id);
    }
}

/// Runs payroll periods against a configuration source and a data store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use lao_payroll_engine::config::ConfigLoader;
/// use lao_payroll_engine::models::{Employee, PayrollPeriod, PeriodStatus};
/// use lao_payroll_engine::payroll_run::PayrollRunner;
/// use lao_payroll_engine::store::InMemoryPayrollStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = Arc::new(InMemoryPayrollStore::new());
/// store.add_period(PayrollPeriod {
///     id: "2026-01".to_string(),
///     year: 2026,
///     month: 1,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     status: PeriodStatus::Draft,
/// }).await;
/// store.add_employee(Employee {
///     id: "emp_001".to_string(),
///     name: "Somphone".to_string(),
///     base_salary: Decimal::new(8_000_000, 0),
///     currency: "LAK".to_string(),
///     dependent_count: 0,
///     is_active: true,
/// }).await;
///
/// let config = Arc::new(ConfigLoader::load("./config/lao").unwrap());
/// let runner = PayrollRunner::new(config, store);
/// let results = runner.run("2026-01").await.unwrap();
/// assert_eq!(results[0].breakdown.net_salary, Decimal::new(729_225_010, 2));
/// # }
/// ```
pub struct PayrollRunner {
    config: Arc<dyn ConfigurationSource>,
    store: Arc<dyn PayrollDataStore>,
    in_flight: Mutex<HashSet<String>>,
}

impl PayrollRunner {
    /// Creates a runner over the given configuration source and store.
    pub fn new(config: Arc<dyn ConfigurationSource>, store: Arc<dyn PayrollDataStore>) -> Self {
        Self {
            config,
            store,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    fn acquire(&self, period_id: &str) -> EngineResult<RunGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert(period_id.to_string()) {
            warn!(period_id = %period_id, "Payroll run already in progress");
            return Err(EngineError::RunInProgress {
                period_id: period_id.to_string(),
            });
        }
        Ok(RunGuard {
            in_flight: &self.in_flight,
            period_id: period_id.to_string(),
        })
    }

    /// Computes every active employee for a period and commits the results.
    ///
    /// Existing results for the period are replaced wholesale and the period
    /// moves to `PROCESSING`. Fails without effect if the period is missing,
    /// finalised, or already being run by this runner.
    pub async fn run(&self, period_id: &str) -> EngineResult<Vec<SalaryCalculationResult>> {
        let _guard = self.acquire(period_id)?;
        let start_time = Instant::now();
        info!(period_id = %period_id, "Starting payroll run");

        let period = self.load_period(period_id).await?;
        if let Err(err) = period.ensure_runnable() {
            warn!(period_id = %period_id, status = %period.status, "Payroll period is not runnable");
            return Err(err);
        }

        let snapshot = self.load_snapshot().await?;
        let holidays = self
            .store
            .holidays_between(period.start_date, period.end_date)
            .await?;
        let employees = self.store.active_employees().await?;

        let mut results = Vec::with_capacity(employees.len());
        for employee in &employees {
            results.push(
                self.compute_employee(&period, employee, &snapshot, &holidays)
                    .await?,
            );
        }

        self.store
            .commit_run(&period.id, results.clone(), PeriodStatus::Processing)
            .await?;

        let total_net: Decimal = results.iter().map(|r| r.breakdown.net_salary).sum();
        info!(
            period_id = %period_id,
            employee_count = results.len(),
            total_net = %total_net,
            duration_ms = start_time.elapsed().as_millis(),
            "Payroll run completed"
        );
        Ok(results)
    }

    /// Computes one employee for a period without persisting anything.
    ///
    /// The period status is not checked, so finalised periods can be
    /// previewed too.
    pub async fn preview(
        &self,
        period_id: &str,
        employee_id: &str,
    ) -> EngineResult<SalaryCalculationResult> {
        let period = self.load_period(period_id).await?;
        let employee = self.store.find_employee(employee_id).await?.ok_or_else(|| {
            EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            }
        })?;

        let snapshot = self.load_snapshot().await?;
        let holidays = self
            .store
            .holidays_between(period.start_date, period.end_date)
            .await?;

        self.compute_employee(&period, &employee, &snapshot, &holidays)
            .await
    }

    async fn load_period(&self, period_id: &str) -> EngineResult<PayrollPeriod> {
        self.store.find_period(period_id).await?.ok_or_else(|| {
            warn!(period_id = %period_id, "Payroll period not found");
            EngineError::PeriodNotFound {
                period_id: period_id.to_string(),
            }
        })
    }

    async fn load_snapshot(&self) -> EngineResult<ConfigurationSnapshot> {
        let snapshot = self.config.load_snapshot().await?;
        if !snapshot.has_work_schedule() {
            warn!("No active work schedule; using the default Monday-Friday schedule");
        }
        if snapshot.tax_brackets().is_empty() {
            warn!("No active tax brackets; income tax will be zero");
        }
        Ok(snapshot)
    }

    async fn compute_employee(
        &self,
        period: &PayrollPeriod,
        employee: &Employee,
        snapshot: &ConfigurationSnapshot,
        holidays: &[Holiday],
    ) -> EngineResult<SalaryCalculationResult> {
        let local_currency = snapshot.local_currency();

        let converter = CurrencyConverter::new(snapshot, &*self.store);
        let exchange_rate = converter
            .rate(&employee.currency, local_currency, period.end_date)
            .await?;
        let base_salary = round_money(employee.base_salary * exchange_rate);

        let attendance = self
            .store
            .attendance_between(&employee.id, period.start_date, period.end_date)
            .await?;
        let overtime = calculate_overtime(&attendance, holidays, base_salary, snapshot);

        let adjustments = self.store.adjustments_for(&period.id, &employee.id).await?;
        let composition = compose_salary(
            base_salary,
            overtime.total_pay,
            &adjustments,
            employee.dependent_count,
            snapshot,
        );

        let settlement = if is_same_currency(&employee.currency, local_currency) {
            None
        } else {
            Some(CurrencySettlement {
                currency: employee.currency.clone(),
                exchange_rate,
                original_base_salary: employee.base_salary,
                original_net_salary: round_money(composition.breakdown.net_salary / exchange_rate),
            })
        };

        debug!(
            period_id = %period.id,
            employee_id = %employee.id,
            gross_income = %composition.breakdown.gross_income,
            overtime_pay = %overtime.total_pay,
            net_salary = %composition.breakdown.net_salary,
            "Computed employee salary"
        );

        Ok(SalaryCalculationResult {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            employee_id: employee.id.clone(),
            period_id: period.id.clone(),
            local_currency: local_currency.to_string(),
            breakdown: composition.breakdown,
            overtime_hours: overtime.total_hours,
            overtime_lines: overtime.lines,
            tax_lines: composition.tax_lines,
            settlement,
        })
    }
}
