//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a payroll operation can report back to the operator.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// Errors fall into three groups: validation (bad or missing input, nothing
/// to export), authorization (wrong credentials or passphrase) and storage
/// (the persisted collections could not be read or written). The wage
/// calculator itself never fails.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
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

    /// An employee record was invalid or incomplete.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A pay period was malformed.
    #[error("Invalid pay period: {message}")]
    InvalidPeriod {
        /// A description of the problem.
        message: String,
    },

    /// The operation needs a complete date range and none was given.
    #[error("Please select a date range")]
    NoPeriodSelected,

    /// Wage records already exist for exactly this period.
    #[error("Wage records already exist for the period {start} to {end}")]
    PeriodAlreadyRecorded {
        /// Start of the colliding period.
        start: DateTime<Utc>,
        /// End of the colliding period.
        end: DateTime<Utc>,
    },

    /// Credentials or administrator passphrase did not match.
    #[error("Incorrect password")]
    Unauthorized,

    /// The filtered record set was empty.
    #[error("No wage records available to export")]
    NothingToExport,

    /// The requested bank file layout does not exist.
    #[error("Unknown export format: {format}")]
    UnknownExportFormat {
        /// The format name as given.
        format: String,
    },

    /// The persisted collections could not be read or written.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// A file could not be rendered.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the rendering failure.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for an [`PayrollError::InvalidEmployee`] error.
    pub fn invalid_employee(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEmployee {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`PayrollError::Storage`] error.
    pub fn storage(message: impl ToString) -> Self {
        Self::Storage {
            message: message.to_string(),
        }
    }

    /// Returns true for errors caused by operator input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmployee { .. }
                | Self::InvalidPeriod { .. }
                | Self::NoPeriodSelected
                | Self::NothingToExport
                | Self::UnknownExportFormat { .. }
        )
    }
}

impl From<csv::Error> for PayrollError {
    fn from(error: csv::Error) -> Self {
        Self::Export {
            message: error.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for PayrollError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = PayrollError::invalid_employee("bank_code", "required for online transfer");
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'bank_code': required for online transfer"
        );
    }

    #[test]
    fn test_period_already_recorded_displays_range() {
        let error = PayrollError::PeriodAlreadyRecorded {
            start: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 1, 7, 0, 0, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Wage records already exist for the period 2026-01-01 00:00:00 UTC to 2026-01-07 00:00:00 UTC"
        );
    }

    #[test]
    fn test_operator_facing_messages() {
        assert_eq!(
            PayrollError::NoPeriodSelected.to_string(),
            "Please select a date range"
        );
        assert_eq!(PayrollError::Unauthorized.to_string(), "Incorrect password");
        assert_eq!(
            PayrollError::NothingToExport.to_string(),
            "No wage records available to export"
        );
    }

    #[test]
    fn test_is_validation_classifies_errors() {
        assert!(PayrollError::NoPeriodSelected.is_validation());
        assert!(PayrollError::NothingToExport.is_validation());
        assert!(PayrollError::invalid_employee("name", "required").is_validation());
        assert!(!PayrollError::Unauthorized.is_validation());
        assert!(!PayrollError::storage("disk full").is_validation());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::EmployeeNotFound {
                id: "emp_404".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
