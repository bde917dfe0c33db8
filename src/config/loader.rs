//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkSchedule;
use crate::store::ConfigurationSource;

use super::types::{ConfigurationSnapshot, PayrollSettings, TaxBracketsConfig};

/// Loads payroll configuration from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/lao/
/// ├── settings.yaml        # Required: currency, NSSF, fallback rates, deductions, multipliers
/// ├── tax_brackets.yaml    # Optional: progressive tax table (absent means zero tax)
/// └── work_schedule.yaml   # Optional: work schedule (absent means Monday-Friday 08:00-17:00)
/// ```
///
/// # Example
///
/// ```no_run
/// use lao_payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/lao").unwrap();
/// println!("Local currency: {}", loader.snapshot().local_currency());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    snapshot: ConfigurationSnapshot,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `settings.yaml` is missing, or if any present file
    /// contains invalid YAML. Missing optional files degrade to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PayrollSettings>(&path.join("settings.yaml"))?;

        let brackets_path = path.join("tax_brackets.yaml");
        let brackets = if brackets_path.exists() {
            Self::load_yaml::<TaxBracketsConfig>(&brackets_path)?.brackets
        } else {
            warn!(path = %brackets_path.display(), "No tax bracket file; income tax will be zero");
            Vec::new()
        };

        let schedule_path = path.join("work_schedule.yaml");
        let schedules = if schedule_path.exists() {
            vec![Self::load_yaml::<WorkSchedule>(&schedule_path)?]
        } else {
            warn!(path = %schedule_path.display(), "No work schedule file; using default schedule");
            Vec::new()
        };

        Ok(Self {
            snapshot: ConfigurationSnapshot::new(settings, brackets, schedules),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration snapshot.
    pub fn snapshot(&self) -> &ConfigurationSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl ConfigurationSource for ConfigLoader {
    async fn load_snapshot(&self) -> EngineResult<ConfigurationSnapshot> {
        Ok(self.snapshot.clone())
    }
}
