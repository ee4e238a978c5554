//! Period-to-predecessor continuity checks.
//!
//! Compares a period against its immediate predecessor to surface policy
//! drift: deduction codes appearing or disappearing, earnings categories
//! appearing, and effective tax rates shifting. The comparison is strictly
//! one period back: a code that disappears and later reappears is
//! reported as new again on reappearance.

use std::collections::HashSet;

use crate::config::AuditConfig;
use crate::models::{Finding, FindingKind, PayPeriod, Severity};

/// Runs the continuity checks for a period against its predecessor.
///
/// Returns an empty list when `previous` is `None` (first period on
/// record). Severities reflect how alarming each drift is on a real
/// statement: a deduction appearing unannounced is an error, a deduction
/// or earnings category dropping off is a warning (it may legitimately
/// be zero for the period), and a tax rate moving beyond the relative
/// tolerance is an error.
pub fn audit_continuity(
    period: &PayPeriod,
    previous: Option<&PayPeriod>,
    config: &AuditConfig,
) -> Vec<Finding> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    let mut findings = Vec::new();

    let prev_codes: HashSet<String> = previous
        .deductions
        .iter()
        .map(|d| normalize(&d.code))
        .collect();
    let curr_codes: HashSet<String> = period
        .deductions
        .iter()
        .map(|d| normalize(&d.code))
        .collect();

    for deduction in &period.deductions {
        if !prev_codes.contains(&normalize(&deduction.code)) {
            findings.push(Finding {
                kind: FindingKind::NewDeductionCode,
                severity: Severity::Error,
                field: deduction.code.clone(),
                expected: None,
                reported: Some(deduction.amount),
                message: format!(
                    "Deduction '{}' appeared; not present on {}",
                    deduction.code, previous.period_ending
                ),
            });
        }
    }

    for deduction in &previous.deductions {
        if !curr_codes.contains(&normalize(&deduction.code)) {
            findings.push(Finding {
                kind: FindingKind::MissingDeductionCode,
                severity: Severity::Warning,
                field: deduction.code.clone(),
                expected: Some(deduction.amount),
                reported: None,
                message: format!(
                    "Deduction '{}' disappeared; was {} on {}",
                    deduction.code, deduction.amount, previous.period_ending
                ),
            });
        }
    }

    let prev_categories: HashSet<String> = previous
        .earnings
        .iter()
        .map(|e| normalize(&e.category))
        .collect();
    for earning in &period.earnings {
        if !prev_categories.contains(&normalize(&earning.category)) {
            findings.push(Finding {
                kind: FindingKind::NewEarningCode,
                severity: Severity::Warning,
                field: earning.category.clone(),
                expected: None,
                reported: Some(earning.amount),
                message: format!(
                    "Earnings category '{}' appeared; not present on {}",
                    earning.category, previous.period_ending
                ),
            });
        }
    }

    let tolerance = config.rules().tolerances.tax_rate_relative;
    for tax in &period.taxes {
        let Some(new_rate) = tax.rate else {
            continue;
        };
        let Some(old_rate) = previous.tax(&tax.tax_type).and_then(|t| t.rate) else {
            continue;
        };

        // Relative comparison so float-sized noise on a large rate does
        // not flag, while a genuinely moved rate does.
        let shifted = if old_rate.is_zero() {
            new_rate.abs() > tolerance
        } else {
            ((new_rate - old_rate) / old_rate).abs() > tolerance
        };
        if shifted {
            findings.push(Finding {
                kind: FindingKind::TaxRateShift,
                severity: Severity::Error,
                field: tax.tax_type.clone(),
                expected: Some(old_rate),
                reported: Some(new_rate),
                message: format!(
                    "{} effective rate moved from {} to {}",
                    tax.tax_type,
                    old_rate.round_dp(4),
                    new_rate.round_dp(4)
                ),
            });
        }
    }

    findings
}

/// Codes are compared trimmed and case-folded; reported findings keep the
/// spelling the statement used.
fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AdjustmentMarkers, AuditRules, ColumnLabels, FieldLabels, LabelConfig, ProjectionConfig,
        SectionLabels, Tolerances,
    };
    use crate::models::{DeductionEntry, EarningEntry, TaxEntry};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_config() -> AuditConfig {
        let labels = LabelConfig {
            fields: FieldLabels {
                gross_pay: strs(&["Gross Pay"]),
                net_pay: strs(&["Net Pay"]),
                remarks: strs(&["Remarks"]),
                agency_banner: strs(&["Earnings and Leave Statement"]),
            },
            sections: SectionLabels {
                earnings: strs(&["Earnings"]),
                deductions: strs(&["Deductions"]),
                leave: strs(&["Leave"]),
            },
            columns: ColumnLabels {
                label: strs(&["Type"]),
                start: strs(&["Start"]),
                earned: strs(&["Earned"]),
                used: strs(&["Used"]),
                ending: strs(&["End"]),
                rate: strs(&["Rate"]),
                hours: strs(&["Hours"]),
                amount: strs(&["Amount"]),
            },
            leave_types: HashMap::new(),
            tax_codes: strs(&["Tax"]),
        };
        let rules = AuditRules {
            tolerances: Tolerances {
                money: dec("0.01"),
                leave_minutes: dec("1"),
                tax_rate_relative: dec("0.01"),
            },
            exempt_leave_types: vec![],
            adjustment_markers: AdjustmentMarkers {
                leave: strs(&["LEAVE ADJUSTMENT"]),
                pay: strs(&["PAY ADJUSTMENT"]),
            },
            projection: ProjectionConfig {
                base_category: "Regular".to_string(),
            },
        };
        AuditConfig::new(rules, labels)
    }

    fn period_with_deductions(d: &str, codes: &[(&str, &str)]) -> PayPeriod {
        let mut period = PayPeriod::new(date(d), dec("4200.00"), dec("3100.00"));
        period.deductions = codes
            .iter()
            .map(|(code, amount)| DeductionEntry {
                code: code.to_string(),
                amount: dec(amount),
            })
            .collect();
        period
    }

    #[test]
    fn test_no_previous_is_no_op() {
        let config = create_test_config();
        let period = period_with_deductions("2025-11-29", &[("Federal Tax", "700.00")]);
        assert!(audit_continuity(&period, None, &config).is_empty());
    }

    #[test]
    fn test_stable_codes_yield_no_findings() {
        let config = create_test_config();
        let previous = period_with_deductions("2025-11-15", &[("Federal Tax", "700.00")]);
        let period = period_with_deductions("2025-11-29", &[("Federal Tax", "702.00")]);

        let findings = audit_continuity(&period, Some(&previous), &config);
        assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
    }

    #[test]
    fn test_new_deduction_code_flagged_once() {
        let config = create_test_config();
        let previous = period_with_deductions("2025-11-15", &[("Federal Tax", "700.00")]);
        let period = period_with_deductions(
            "2025-11-29",
            &[("Federal Tax", "700.00"), ("Garnishment", "250.00")],
        );

        let findings = audit_continuity(&period, Some(&previous), &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::NewDeductionCode);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].field, "Garnishment");
        assert_eq!(findings[0].reported, Some(dec("250.00")));
    }

    #[test]
    fn test_code_comparison_ignores_case_and_padding() {
        let config = create_test_config();
        let previous = period_with_deductions("2025-11-15", &[("Federal Tax", "700.00")]);
        let period = period_with_deductions("2025-11-29", &[("  FEDERAL TAX ", "700.00")]);

        let findings = audit_continuity(&period, Some(&previous), &config);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_missing_deduction_code_is_warning() {
        let config = create_test_config();
        let previous = period_with_deductions(
            "2025-11-15",
            &[("Federal Tax", "700.00"), ("Health Ins", "139.60")],
        );
        let period = period_with_deductions("2025-11-29", &[("Federal Tax", "700.00")]);

        let findings = audit_continuity(&period, Some(&previous), &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MissingDeductionCode);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].field, "Health Ins");
    }

    #[test]
    fn test_new_earning_category_is_warning() {
        let config = create_test_config();
        let mut previous = period_with_deductions("2025-11-15", &[]);
        previous.earnings = vec![EarningEntry {
            category: "Regular Pay".to_string(),
            rate: None,
            hours: None,
            amount: dec("4200.00"),
        }];
        let mut period = period_with_deductions("2025-11-29", &[]);
        period.earnings = vec![
            EarningEntry {
                category: "Regular Pay".to_string(),
                rate: None,
                hours: None,
                amount: dec("4200.00"),
            },
            EarningEntry {
                category: "Hazard Pay".to_string(),
                rate: None,
                hours: None,
                amount: dec("300.00"),
            },
        ];

        let findings = audit_continuity(&period, Some(&previous), &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::NewEarningCode);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].field, "Hazard Pay");
    }

    #[test]
    fn test_tax_rate_shift_beyond_tolerance_flagged() {
        let config = create_test_config();
        let mut previous = period_with_deductions("2025-11-15", &[]);
        previous.taxes = vec![TaxEntry {
            tax_type: "Federal Tax".to_string(),
            amount: dec("700.00"),
            rate: Some(dec("0.1666")),
        }];
        let mut period = period_with_deductions("2025-11-29", &[]);
        period.taxes = vec![TaxEntry {
            tax_type: "Federal Tax".to_string(),
            amount: dec("900.00"),
            rate: Some(dec("0.2142")),
        }];

        let findings = audit_continuity(&period, Some(&previous), &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::TaxRateShift);
        assert_eq!(findings[0].expected, Some(dec("0.1666")));
        assert_eq!(findings[0].reported, Some(dec("0.2142")));
    }

    #[test]
    fn test_tax_rate_noise_within_relative_tolerance_ignored() {
        let config = create_test_config();
        let mut previous = period_with_deductions("2025-11-15", &[]);
        previous.taxes = vec![TaxEntry {
            tax_type: "OASDI".to_string(),
            amount: dec("260.40"),
            rate: Some(dec("0.0620")),
        }];
        let mut period = period_with_deductions("2025-11-29", &[]);
        period.taxes = vec![TaxEntry {
            tax_type: "OASDI".to_string(),
            amount: dec("260.45"),
            rate: Some(dec("0.0621")),
        }];

        // 0.0620 -> 0.0621 is ~0.16% relative movement, inside the 1%
        // tolerance.
        let findings = audit_continuity(&period, Some(&previous), &config);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_tax_type_absent_from_either_side_is_skipped() {
        let config = create_test_config();
        let mut previous = period_with_deductions("2025-11-15", &[]);
        previous.taxes = vec![TaxEntry {
            tax_type: "State Tax".to_string(),
            amount: dec("100.00"),
            rate: Some(dec("0.02")),
        }];
        let mut period = period_with_deductions("2025-11-29", &[]);
        period.taxes = vec![TaxEntry {
            tax_type: "Federal Tax".to_string(),
            amount: dec("700.00"),
            rate: Some(dec("0.1666")),
        }];

        let findings = audit_continuity(&period, Some(&previous), &config);
        assert!(findings.iter().all(|f| f.kind != FindingKind::TaxRateShift));
    }

    #[test]
    fn test_reappearing_code_is_new_again() {
        // Strictly period-to-immediate-predecessor: the N-2 history does
        // not suppress the finding.
        let config = create_test_config();
        let previous = period_with_deductions("2025-11-15", &[("Federal Tax", "700.00")]);
        let period = period_with_deductions(
            "2025-11-29",
            &[("Federal Tax", "700.00"), ("Union Dues", "30.00")],
        );

        let findings = audit_continuity(&period, Some(&previous), &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::NewDeductionCode);
    }
}
