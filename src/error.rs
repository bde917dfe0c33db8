//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll run. Missing
//! configuration and malformed attendance are deliberately absent: the engine
//! degrades to defaults for those instead of failing.

use thiserror::Error;

use crate::models::PeriodStatus;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use lao_payroll_engine::error::EngineError;
///
/// let error = EngineError::PeriodNotFound {
///     period_id: "2026-01".to_string(),
/// };
/// assert_eq!(error.to_string(), "Payroll period not found: 2026-01");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested payroll period does not exist.
    #[error("Payroll period not found: {period_id}")]
    PeriodNotFound {
        /// The period that was requested.
        period_id: String,
    },

    /// The payroll period is finalised and can no longer be computed.
    #[error("Payroll period '{period_id}' cannot be computed in status {status}")]
    PeriodNotRunnable {
        /// The period that was requested.
        period_id: String,
        /// The status that blocked the run.
        status: PeriodStatus,
    },

    /// A payroll period status change is not allowed by the status machine.
    #[error("Invalid payroll period status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: PeriodStatus,
        /// The requested status.
        to: PeriodStatus,
    },

    /// Another run for the same period is already in flight.
    #[error("A payroll run is already in progress for period '{period_id}'")]
    RunInProgress {
        /// The period being run.
        period_id: String,
    },

    /// The requested employee does not exist in the directory.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee that was requested.
        employee_id: String,
    },

    /// A collaborator store failed to read or write.
    #[error("Store error: {message}")]
    StoreError {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_period_not_runnable_displays_status() {
        let error = EngineError::PeriodNotRunnable {
            period_id: "2026-01".to_string(),
            status: PeriodStatus::Approved,
        };
        assert_eq!(
            error.to_string(),
            "Payroll period '2026-01' cannot be computed in status APPROVED"
        );
    }

    #[test]
    fn test_invalid_transition_displays_both_statuses() {
        let error = EngineError::InvalidStatusTransition {
            from: PeriodStatus::Locked,
            to: PeriodStatus::Draft,
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll period status transition: LOCKED -> DRAFT"
        );
    }

    #[test]
    fn test_run_in_progress_displays_period() {
        let error = EngineError::RunInProgress {
            period_id: "2026-02".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "A payroll run is already in progress for period '2026-02'"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::PeriodNotFound {
                period_id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
