//! Configuration loading and management for the payroll engine.
//!
//! This module loads payroll settings, the income tax table and the work
//! schedule from YAML files, and bundles them into the immutable
//! [`ConfigurationSnapshot`] a payroll run computes against.
//!
//! # Example
//!
//! ```no_run
//! use lao_payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/lao").unwrap();
//! println!("NSSF ceiling: {}", config.snapshot().settings().nssf.ceiling);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ConfigurationSnapshot, FamilyDeductionSettings, NssfSettings, OvertimeMultipliers,
    PayrollSettings, TaxBracketsConfig,
};
