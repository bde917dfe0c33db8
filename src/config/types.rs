//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed settings deserialized from YAML
//! and the immutable [`ConfigurationSnapshot`] handed to every calculation
//! of a payroll run.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{TaxBracket, WorkSchedule};

fn default_local_currency() -> String {
    "LAK".to_string()
}

fn default_fallback_rates() -> HashMap<String, Decimal> {
    HashMap::from([
        ("USD".to_string(), Decimal::new(21_500, 0)),
        ("THB".to_string(), Decimal::new(620, 0)),
    ])
}

/// National Social Security Fund settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NssfSettings {
    /// Highest monthly income subject to contributions.
    pub ceiling: Decimal,
    /// Employee contribution rate, as a fraction.
    pub employee_rate: Decimal,
    /// Employer contribution rate, as a fraction.
    pub employer_rate: Decimal,
}

impl Default for NssfSettings {
    fn default() -> Self {
        Self {
            ceiling: Decimal::new(4_500_000, 0),
            employee_rate: Decimal::new(55, 3),
            employer_rate: Decimal::new(60, 3),
        }
    }
}

/// Family (dependent) deduction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyDeductionSettings {
    /// Monthly allowance per dependent.
    pub per_dependent: Decimal,
    /// Dependents counted at most.
    pub max_dependents: u32,
}

impl Default for FamilyDeductionSettings {
    fn default() -> Self {
        Self {
            per_dependent: Decimal::new(416_667, 0),
            max_dependents: 3,
        }
    }
}

/// Overtime pay multipliers per rate bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeMultipliers {
    /// Holiday or non-scheduled day, 06:00 to 16:00.
    pub holiday_day: Decimal,
    /// Holiday or non-scheduled day, 16:00 to 22:00.
    pub holiday_evening: Decimal,
    /// Holiday or non-scheduled day, 22:00 to 06:00.
    pub holiday_night: Decimal,
    /// Workday, outside the normal window between 06:00 and 22:00.
    pub workday_extended: Decimal,
    /// Workday, 22:00 to 06:00.
    pub workday_night: Decimal,
}

impl Default for OvertimeMultipliers {
    fn default() -> Self {
        Self {
            holiday_day: Decimal::new(25, 1),
            holiday_evening: Decimal::new(30, 1),
            holiday_night: Decimal::new(35, 1),
            workday_extended: Decimal::new(15, 1),
            workday_night: Decimal::new(20, 1),
        }
    }
}

/// System-wide payroll settings, from `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// The local (reporting) currency code.
    #[serde(default = "default_local_currency")]
    pub local_currency: String,
    /// NSSF settings.
    #[serde(default)]
    pub nssf: NssfSettings,
    /// Fallback local-currency units per foreign unit, used when no rate row applies.
    #[serde(default = "default_fallback_rates")]
    pub fallback_rates: HashMap<String, Decimal>,
    /// Family deduction settings.
    #[serde(default)]
    pub family_deduction: FamilyDeductionSettings,
    /// Overtime multipliers.
    #[serde(default)]
    pub overtime: OvertimeMultipliers,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            local_currency: default_local_currency(),
            nssf: NssfSettings::default(),
            fallback_rates: default_fallback_rates(),
            family_deduction: FamilyDeductionSettings::default(),
            overtime: OvertimeMultipliers::default(),
        }
    }
}

/// Tax bracket file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracketsConfig {
    /// The brackets in any order.
    pub brackets: Vec<TaxBracket>,
}

/// The immutable configuration a payroll run computes against.
///
/// Built once per run and passed by reference to every calculation, so a
/// configuration change during a run cannot produce a mixed result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSnapshot {
    settings: PayrollSettings,
    tax_brackets: Vec<TaxBracket>,
    work_schedule: Option<WorkSchedule>,
    default_schedule: WorkSchedule,
}

impl ConfigurationSnapshot {
    /// Creates a snapshot, keeping active brackets in ascending sort order and
    /// the first active schedule.
    pub fn new(
        settings: PayrollSettings,
        tax_brackets: Vec<TaxBracket>,
        work_schedules: Vec<WorkSchedule>,
    ) -> Self {
        let mut tax_brackets: Vec<TaxBracket> =
            tax_brackets.into_iter().filter(|b| b.is_active).collect();
        tax_brackets.sort_by_key(|b| b.sort_order);
        let work_schedule = work_schedules.into_iter().find(|s| s.is_active);

        Self {
            settings,
            tax_brackets,
            work_schedule,
            default_schedule: WorkSchedule::default(),
        }
    }

    /// Returns the payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the active tax brackets in ascending order.
    pub fn tax_brackets(&self) -> &[TaxBracket] {
        &self.tax_brackets
    }

    /// Returns the active work schedule, or the default Monday-Friday schedule.
    pub fn work_schedule(&self) -> &WorkSchedule {
        self.work_schedule.as_ref().unwrap_or(&self.default_schedule)
    }

    /// Returns true if a work schedule was configured.
    pub fn has_work_schedule(&self) -> bool {
        self.work_schedule.is_some()
    }

    /// Returns the local currency code.
    pub fn local_currency(&self) -> &str {
        &self.settings.local_currency
    }
}

impl Default for ConfigurationSnapshot {
    fn default() -> Self {
        Self::new(PayrollSettings::default(), Vec::new(), Vec::new())
    }
}
