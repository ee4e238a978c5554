//! Intra-period arithmetic checks.
//!
//! Validates each period against the identities a statement must satisfy:
//! every leave balance must obey start + earned - used == ending, the
//! earnings lines must sum to gross, and gross minus deductions must equal
//! net. Violations are reported as findings, never rejected; the period
//! stays stored either way.
//!
//! Leave balances are printed in hours.minutes dotted notation (`8.50`
//! means 8 hours 50 minutes), so the identity is evaluated in minutes,
//! not by decimal subtraction.

use rust_decimal::Decimal;

use crate::config::AuditConfig;
use crate::models::{Finding, FindingKind, PayPeriod, Severity};

/// Converts a dotted hours.minutes value to whole minutes.
///
/// # Example
///
/// ```
/// use paystub_audit::audit::to_minutes;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dotted = Decimal::from_str("8.50").unwrap(); // 8 h 50 min
/// assert_eq!(to_minutes(dotted), Decimal::from(530));
/// ```
pub fn to_minutes(dotted: Decimal) -> Decimal {
    let sixty = Decimal::from(60);
    let hundred = Decimal::from(100);
    let hours = dotted.trunc();
    let minutes = ((dotted - hours) * hundred).round();
    hours * sixty + minutes
}

/// Converts whole minutes back to dotted hours.minutes notation.
///
/// # Example
///
/// ```
/// use paystub_audit::audit::to_dotted;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(to_dotted(Decimal::from(530)), Decimal::from_str("8.5").unwrap());
/// ```
pub fn to_dotted(minutes: Decimal) -> Decimal {
    let sixty = Decimal::from(60);
    let hundred = Decimal::from(100);
    let hours = (minutes / sixty).trunc();
    let remainder = minutes - hours * sixty;
    hours + remainder / hundred
}

/// Runs the arithmetic checks over one period.
///
/// Returns one finding per violated identity. Findings default to
/// `Error` severity; a recognized adjustment phrase in the remarks
/// downgrades findings in the category it references to `Warning`. A
/// leave-adjustment remark never suppresses a net-pay mismatch, and a
/// downgrade never removes an entry.
///
/// Speculative periods are projections by construction and produce no
/// findings.
pub fn audit_arithmetic(period: &PayPeriod, config: &AuditConfig) -> Vec<Finding> {
    if period.speculative {
        return Vec::new();
    }

    let rules = config.rules();
    let mut findings = Vec::new();

    for entry in &period.leave {
        let exempt = rules
            .exempt_leave_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(&entry.leave_type));
        if exempt {
            continue;
        }

        let expected_minutes = to_minutes(entry.starting_balance) + to_minutes(entry.earned)
            - to_minutes(entry.used);
        let reported_minutes = to_minutes(entry.ending_balance);

        if (expected_minutes - reported_minutes).abs() > rules.tolerances.leave_minutes {
            let expected = to_dotted(expected_minutes);
            findings.push(Finding {
                kind: FindingKind::LeaveMismatch,
                severity: Severity::Error,
                field: entry.leave_type.clone(),
                expected: Some(expected),
                reported: Some(entry.ending_balance),
                message: format!(
                    "{} leave: {} + {} - {} should end at {}, statement says {}",
                    entry.leave_type,
                    entry.starting_balance,
                    entry.earned,
                    entry.used,
                    expected,
                    entry.ending_balance
                ),
            });
        }
    }

    if !period.earnings.is_empty() {
        let earnings_sum = period.earnings_total();
        if (earnings_sum - period.gross_pay).abs() > rules.tolerances.money {
            findings.push(Finding {
                kind: FindingKind::GrossPayMismatch,
                severity: Severity::Error,
                field: "gross_pay".to_string(),
                expected: Some(earnings_sum),
                reported: Some(period.gross_pay),
                message: format!(
                    "Earnings sum to {}, statement gross is {}",
                    earnings_sum, period.gross_pay
                ),
            });
        }
    }

    let expected_net = period.gross_pay - period.deduction_total();
    if (expected_net - period.net_pay).abs() > rules.tolerances.money {
        findings.push(Finding {
            kind: FindingKind::NetPayMismatch,
            severity: Severity::Error,
            field: "net_pay".to_string(),
            expected: Some(expected_net),
            reported: Some(period.net_pay),
            message: format!(
                "Gross {} - deductions {} should net {}, statement says {}",
                period.gross_pay,
                period.deduction_total(),
                expected_net,
                period.net_pay
            ),
        });
    }

    apply_adjustment_markers(findings, period, config)
}

/// Downgrades findings whose category a remark phrase explains.
///
/// A heuristic, not a guarantee: the match is a documented
/// case-insensitive substring check and nothing stronger.
fn apply_adjustment_markers(
    findings: Vec<Finding>,
    period: &PayPeriod,
    config: &AuditConfig,
) -> Vec<Finding> {
    let remarks = match &period.remarks {
        Some(text) if !text.is_empty() => text.to_uppercase(),
        _ => return findings,
    };
    let markers = &config.rules().adjustment_markers;
    let mentioned = |phrases: &[String]| phrases.iter().any(|p| remarks.contains(&p.to_uppercase()));

    let leave_explained = mentioned(&markers.leave);
    let pay_explained = mentioned(&markers.pay);

    findings
        .into_iter()
        .map(|finding| match finding.kind {
            FindingKind::LeaveMismatch if leave_explained => finding.downgraded(),
            FindingKind::GrossPayMismatch | FindingKind::NetPayMismatch if pay_explained => {
                finding.downgraded()
            }
            _ => finding,
        })
        .collect()
}
