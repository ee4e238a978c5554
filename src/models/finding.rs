//! Audit finding model.
//!
//! A [`Finding`] is one reported discrepancy from an audit pass. Findings
//! are pure reporting: the audited period is stored and available whether
//! or not findings exist, and a severity downgrade never removes an entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of discrepancy a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A leave balance does not satisfy start + earned - used == ending.
    LeaveMismatch,
    /// The earnings lines do not sum to the reported gross pay.
    GrossPayMismatch,
    /// Gross minus deductions does not equal the reported net pay.
    NetPayMismatch,
    /// A deduction code appeared that the prior period did not carry.
    NewDeductionCode,
    /// A deduction code from the prior period disappeared.
    MissingDeductionCode,
    /// An earnings category appeared that the prior period did not carry.
    NewEarningCode,
    /// An effective tax rate moved beyond tolerance between periods.
    TaxRateShift,
    /// Speculative projections do not sum to the actual lump-sum payout.
    LumpSumDelta,
}

/// How serious a finding is.
///
/// `Error` marks arithmetic or policy violations; `Warning` marks entries
/// that are informational or that a recognized adjustment remark explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational or explained by an adjustment remark.
    Warning,
    /// An unexplained violation.
    Error,
}

/// One reported discrepancy from an audit pass.
///
/// The dashboard renders findings as (field, computed, reported, severity)
/// tuples; `expected` and `reported` are `None` for kinds that have no
/// numeric comparison (e.g., a new deduction code).
///
/// # Example
///
/// ```
/// use paystub_audit::models::{Finding, FindingKind, Severity};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let finding = Finding {
///     kind: FindingKind::LeaveMismatch,
///     severity: Severity::Error,
///     field: "Annual".to_string(),
///     expected: Some(Decimal::from_str("32.00").unwrap()),
///     reported: Some(Decimal::from_str("30.00").unwrap()),
///     message: "Annual leave ending balance should be 32.00, statement says 30.00".to_string(),
/// };
/// assert_eq!(finding.kind, FindingKind::LeaveMismatch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The kind of discrepancy.
    pub kind: FindingKind,
    /// The severity after any adjustment-remark downgrade.
    pub severity: Severity,
    /// The affected field or category (leave type, deduction code, ...).
    pub field: String,
    /// The value the engine computed, when the kind has one.
    pub expected: Option<Decimal>,
    /// The value the statement reported, when the kind has one.
    pub reported: Option<Decimal>,
    /// Human-readable explanation of the discrepancy.
    pub message: String,
}

impl Finding {
    /// Downgrades the finding to `Warning`, keeping everything else.
    ///
    /// Used when a recognized adjustment remark explains the discrepancy;
    /// the entry itself is never dropped.
    pub fn downgraded(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_downgraded_changes_only_severity() {
        let finding = Finding {
            kind: FindingKind::NetPayMismatch,
            severity: Severity::Error,
            field: "net_pay".to_string(),
            expected: Some(dec("3100.00")),
            reported: Some(dec("3000.00")),
            message: "Gross - deductions != net".to_string(),
        };
        let downgraded = finding.clone().downgraded();
        assert_eq!(downgraded.severity, Severity::Warning);
        assert_eq!(downgraded.kind, finding.kind);
        assert_eq!(downgraded.expected, finding.expected);
        assert_eq!(downgraded.message, finding.message);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FindingKind::NewDeductionCode).unwrap();
        assert_eq!(json, "\"new_deduction_code\"");
        let json = serde_json::to_string(&FindingKind::LumpSumDelta).unwrap();
        assert_eq!(json, "\"lump_sum_delta\"");
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn test_finding_round_trips_through_json() {
        let finding = Finding {
            kind: FindingKind::TaxRateShift,
            severity: Severity::Error,
            field: "OASDI".to_string(),
            expected: Some(dec("0.062")),
            reported: Some(dec("0.07")),
            message: "OASDI effective rate moved".to_string(),
        };
        let json = serde_json::to_string(&finding).unwrap();
        let back: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, finding);
    }
}
