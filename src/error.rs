//! Error types for the paystub audit engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during ingestion, lookup, and
//! reconciliation. Audit findings are not errors; a period with findings
//! is still stored and reportable; see [`crate::models::Finding`].

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the paystub audit engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Every
/// variant is fatal only to the single operation that produced it; there is
/// no global failure mode.
///
/// # Example
///
/// ```
/// use paystub_audit::error::AuditError;
///
/// let error = AuditError::MissingRequiredField {
///     field: "gross_pay".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required field not found in document: gross_pay");
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// A required field (gross pay, net pay) could not be located in the
    /// document. The ingestion of that one document is aborted; the store
    /// is untouched.
    #[error("Required field not found in document: {field}")]
    MissingRequiredField {
        /// The canonical name of the missing field.
        field: String,
    },

    /// The document does not look like a paystub statement at all.
    #[error("Unrecognized document structure: {message}")]
    UnrecognizedDocumentStructure {
        /// A description of what made the document unreadable.
        message: String,
    },

    /// No pay period is stored under the requested date.
    #[error("No pay period stored for {date}")]
    PeriodNotFound {
        /// The pay-period-end date that was requested.
        date: NaiveDate,
    },

    /// A shadow record was requested but no prior period carries a usable
    /// pay rate to project from.
    #[error("No rate basis available for shadow record dated {date}")]
    NoRateBasis {
        /// The pay-period-end date of the requested shadow record.
        date: NaiveDate,
    },

    /// A reconciliation was requested but no unreconciled speculative
    /// records are eligible for the payout date.
    #[error("No unreconciled speculative records on or before {date}")]
    NoUnreconciledRecords {
        /// The actual payout's pay-period-end date.
        date: NaiveDate,
    },

    /// A reconciliation request named records that cannot be reconciled,
    /// or a payout target that is itself speculative.
    #[error("Invalid reconciliation: {message}")]
    InvalidReconciliation {
        /// A description of what made the request invalid.
        message: String,
    },

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
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_displays_field() {
        let error = AuditError::MissingRequiredField {
            field: "net_pay".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Required field not found in document: net_pay"
        );
    }

    #[test]
    fn test_period_not_found_displays_date() {
        let error = AuditError::PeriodNotFound {
            date: NaiveDate::from_ymd_opt(2025, 11, 29).unwrap(),
        };
        assert_eq!(error.to_string(), "No pay period stored for 2025-11-29");
    }

    #[test]
    fn test_no_rate_basis_displays_date() {
        let error = AuditError::NoRateBasis {
            date: NaiveDate::from_ymd_opt(2025, 12, 13).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No rate basis available for shadow record dated 2025-12-13"
        );
    }

    #[test]
    fn test_no_unreconciled_records_displays_date() {
        let error = AuditError::NoUnreconciledRecords {
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No unreconciled speculative records on or before 2026-01-10"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = AuditError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AuditError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unrecognized() -> AuditResult<()> {
            Err(AuditError::UnrecognizedDocumentStructure {
                message: "no tables".to_string(),
            })
        }

        fn propagates_error() -> AuditResult<()> {
            returns_unrecognized()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
