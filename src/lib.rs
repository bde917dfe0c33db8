//! Payroll Engine for the Lao jurisdiction
//!
//! This crate computes monthly payroll: NSSF social-security contributions,
//! progressive personal income tax, overtime priced by time-of-day buckets
//! from raw clock-in/clock-out attendance, multi-currency base salary
//! conversion, and net salary composition from earnings, bonuses and
//! deductions. [`payroll_run::PayrollRunner`] orchestrates a whole period
//! against the collaborator stores in [`store`].

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll_run;
pub mod store;
