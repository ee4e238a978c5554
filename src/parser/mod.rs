//! Statement document parsing.
//!
//! This module turns one loosely-formatted HTML paystub into a typed
//! [`PayPeriod`]. There is no schema to rely on: label text and table
//! layout vary release to release, so extraction is driven entirely by
//! fuzzy label matching: find a cell matching a known label pattern,
//! read the adjacent cell (or the remainder of the same cell) as the
//! value. Line-item sections are located by banner rows or header rows
//! and their columns are mapped by header text, never by fixed position.
//!
//! The pay-period-end date is not parsed from document content; callers
//! derive it from the file name and pass it in explicitly.

mod document;
mod labels;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::AuditConfig;
use crate::error::{AuditError, AuditResult};
use crate::models::{DeductionEntry, EarningEntry, LeaveEntry, PayPeriod, TaxEntry};

use document::{Table, extract_tables};
use labels::{ColumnRole, LabelRegistry, ScalarField, Section};

/// Parses paystub statements against a configured label vocabulary.
///
/// The parser is pure: it produces a [`PayPeriod`] and never touches the
/// store. Construct it once and reuse it across documents; compiling the
/// label patterns is the expensive part.
///
/// # Example
///
/// ```no_run
/// use paystub_audit::config::ConfigLoader;
/// use paystub_audit::parser::DocumentParser;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let parser = DocumentParser::new(loader.config());
/// let date = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
/// let period = parser.parse("<html>...</html>", date).unwrap();
/// println!("Gross: {}", period.gross_pay);
/// ```
pub struct DocumentParser {
    registry: LabelRegistry,
    tax_codes: Vec<String>,
}

impl DocumentParser {
    /// Compiles a parser from the label configuration.
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            registry: LabelRegistry::new(config.labels()),
            tax_codes: config.labels().tax_codes.clone(),
        }
    }

    /// Parses one statement document into a pay period.
    ///
    /// # Arguments
    ///
    /// * `html` - The raw statement document.
    /// * `period_ending` - The pay-period-end date, supplied out-of-band.
    ///
    /// # Returns
    ///
    /// Returns the parsed period, or an error if:
    /// - The document contains no tables (`UnrecognizedDocumentStructure`)
    /// - Gross pay or net pay cannot be located (`MissingRequiredField`)
    ///
    /// All other fields are optional; absence is recorded as not-present,
    /// which is distinct from present-with-zero.
    pub fn parse(&self, html: &str, period_ending: NaiveDate) -> AuditResult<PayPeriod> {
        let tables = extract_tables(html);
        if tables.is_empty() {
            return Err(AuditError::UnrecognizedDocumentStructure {
                message: "document contains no tables".to_string(),
            });
        }

        let scalars = self.scan_scalars(&tables);
        let gross_pay = scalars
            .gross
            .ok_or_else(|| AuditError::MissingRequiredField {
                field: "gross_pay".to_string(),
            })?;
        let net_pay = scalars.net.ok_or_else(|| AuditError::MissingRequiredField {
            field: "net_pay".to_string(),
        })?;

        let mut sections = SectionLines::default();
        for table in &tables {
            self.scan_sections(table, &mut sections);
        }

        let taxes = derive_taxes(&sections.deductions, gross_pay, &self.tax_codes);

        Ok(PayPeriod {
            period_ending,
            gross_pay,
            net_pay,
            agency: scalars.agency,
            earnings: sections.earnings,
            deductions: sections.deductions,
            leave: sections.leave,
            taxes,
            remarks: scalars.remarks,
            speculative: false,
            reconciled: false,
            file_source: None,
        })
    }

    /// Scans every cell for the scalar fields and the agency banner.
    fn scan_scalars(&self, tables: &[Table]) -> Scalars {
        let mut scalars = Scalars::default();

        for table in tables {
            for row in &table.rows {
                for (idx, cell) in row.iter().enumerate() {
                    if scalars.agency.is_none() {
                        scalars.agency = self.agency_from_cell(cell);
                    }

                    let Some((field, rest)) = self.registry.scalar_value(cell) else {
                        continue;
                    };
                    let next = row[idx + 1..].iter().find(|c| !c.is_empty());

                    match field {
                        ScalarField::GrossPay if scalars.gross.is_none() => {
                            scalars.gross = money_value(rest.as_deref(), next);
                        }
                        ScalarField::NetPay if scalars.net.is_none() => {
                            scalars.net = money_value(rest.as_deref(), next);
                        }
                        ScalarField::Remarks if scalars.remarks.is_none() => {
                            let text = rest
                                .or_else(|| next.map(|c| c.to_string()))
                                .unwrap_or_default();
                            scalars.remarks = Some(text);
                        }
                        _ => {}
                    }
                }
            }
        }

        scalars
    }

    /// Reads the agency name from a header cell: the line printed above
    /// the statement banner.
    fn agency_from_cell(&self, cell: &str) -> Option<String> {
        let lines: Vec<&str> = cell
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let banner_idx = lines.iter().position(|l| self.registry.is_agency_banner(l))?;
        (banner_idx > 0).then(|| lines[banner_idx - 1].to_string())
    }

    /// Walks a table's rows, tracking the current line-item section and
    /// column mapping, and collects earnings/deduction/leave lines.
    fn scan_sections(&self, table: &Table, out: &mut SectionLines) {
        let mut section: Option<Section> = None;
        let mut columns: Option<Vec<(usize, ColumnRole)>> = None;

        for row in &table.rows {
            let non_empty: Vec<(usize, &String)> =
                row.iter().enumerate().filter(|(_, c)| !c.is_empty()).collect();
            if non_empty.is_empty() {
                continue;
            }

            // Banner row: a single populated cell naming a section.
            if non_empty.len() == 1 {
                if let Some(sec) = self.registry.section_of(non_empty[0].1) {
                    section = Some(sec);
                    columns = None;
                    continue;
                }
            }

            // Header row: column names, no amounts.
            let roles: Vec<(usize, ColumnRole)> = non_empty
                .iter()
                .filter_map(|(idx, cell)| self.registry.column_role(cell).map(|r| (*idx, r)))
                .collect();
            let has_money = non_empty.iter().any(|(_, c)| parse_amount(c).is_some());
            let has_label_col = roles.iter().any(|(_, r)| *r == ColumnRole::Label);
            let value_roles = roles.iter().filter(|(_, r)| *r != ColumnRole::Label).count();

            if !has_money && (value_roles >= 2 || (value_roles >= 1 && has_label_col)) {
                let has = |role: ColumnRole| roles.iter().any(|(_, r)| *r == role);
                if has(ColumnRole::Start) && has(ColumnRole::Ending) {
                    section = Some(Section::Leave);
                } else if has(ColumnRole::Rate) || has(ColumnRole::Hours) {
                    section = Some(Section::Earnings);
                } else if section.is_none() && has_label_col && has(ColumnRole::Amount) {
                    section = Some(Section::Deductions);
                }
                columns = Some(roles);
                continue;
            }

            let Some(sec) = section else {
                continue;
            };
            self.collect_line(sec, row, &non_empty, columns.as_deref(), out);
        }
    }

    /// Interprets one data row under the current section.
    fn collect_line(
        &self,
        section: Section,
        row: &[String],
        non_empty: &[(usize, &String)],
        columns: Option<&[(usize, ColumnRole)]>,
        out: &mut SectionLines,
    ) {
        let label_idx = columns
            .and_then(|cols| {
                cols.iter()
                    .find(|(_, r)| *r == ColumnRole::Label)
                    .map(|(i, _)| *i)
            })
            .filter(|i| row.get(*i).is_some_and(|c| !c.is_empty()))
            .or(non_empty.first().map(|(i, _)| *i));
        let Some(label_idx) = label_idx else {
            return;
        };
        let label = row[label_idx].trim();

        // Not a line item: empty label, a bare amount, or a totals row.
        if label.is_empty() || parse_amount(label).is_some() {
            return;
        }
        if label.to_lowercase().starts_with("total") {
            return;
        }

        let at = |role: ColumnRole| -> Option<Decimal> {
            columns?
                .iter()
                .find(|(_, r)| *r == role)
                .and_then(|(i, _)| row.get(*i))
                .and_then(|c| parse_amount(c))
        };
        let trailing: Vec<Decimal> = non_empty
            .iter()
            .filter(|(i, _)| *i > label_idx)
            .filter_map(|(_, c)| parse_amount(c))
            .collect();

        match section {
            Section::Leave => {
                let (Some(start), Some(earned), Some(used), Some(ending)) = (
                    at(ColumnRole::Start),
                    at(ColumnRole::Earned),
                    at(ColumnRole::Used),
                    at(ColumnRole::Ending),
                ) else {
                    return;
                };
                out.leave.push(LeaveEntry {
                    leave_type: self.registry.canonical_leave_type(label),
                    starting_balance: start,
                    earned,
                    used,
                    ending_balance: ending,
                });
            }
            Section::Earnings => {
                let Some(amount) = at(ColumnRole::Amount).or(trailing.last().copied()) else {
                    return;
                };
                let rate = at(ColumnRole::Rate)
                    .or_else(|| (trailing.len() >= 2).then(|| trailing[0]));
                let hours = at(ColumnRole::Hours)
                    .or_else(|| (trailing.len() >= 3).then(|| trailing[1]));
                out.earnings.push(EarningEntry {
                    category: label.to_string(),
                    rate,
                    hours,
                    amount,
                });
            }
            Section::Deductions => {
                let Some(amount) = at(ColumnRole::Amount).or(trailing.last().copied()) else {
                    return;
                };
                out.deductions.push(DeductionEntry {
                    code: label.to_string(),
                    amount,
                });
            }
        }
    }
}

/// Scalar fields found while scanning.
#[derive(Default)]
struct Scalars {
    gross: Option<Decimal>,
    net: Option<Decimal>,
    remarks: Option<String>,
    agency: Option<String>,
}

/// Line items collected while scanning.
#[derive(Default)]
struct SectionLines {
    earnings: Vec<EarningEntry>,
    deductions: Vec<DeductionEntry>,
    leave: Vec<LeaveEntry>,
}

/// Resolves a scalar value from the label cell's remainder or the
/// adjacent cell. Only an amount that actually parses counts; a label
/// followed by prose is not a value.
fn money_value(rest: Option<&str>, next: Option<&String>) -> Option<Decimal> {
    match rest {
        Some(text) => parse_amount(text),
        None => next.and_then(|c| parse_amount(c)),
    }
}

/// Parses a monetary or numeric cell: `$ 4,200.00`, `(42.00)`, `36.00`.
fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let (cleaned, negative) = match cleaned.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (inner.to_string(), true),
        None => (cleaned, false),
    };
    let value: Decimal = cleaned.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Derives the tax lines from the deductions whose codes match the
/// configured tax patterns. The rate is the effective rate against gross
/// pay, left unset when gross is zero.
pub(crate) fn derive_taxes(
    deductions: &[DeductionEntry],
    gross_pay: Decimal,
    tax_codes: &[String],
) -> Vec<TaxEntry> {
    let patterns: Vec<String> = tax_codes.iter().map(|c| c.to_lowercase()).collect();
    deductions
        .iter()
        .filter(|d| {
            let code = d.code.to_lowercase();
            patterns.iter().any(|p| code.contains(p))
        })
        .map(|d| TaxEntry {
            tax_type: d.code.clone(),
            amount: d.amount,
            rate: (gross_pay > Decimal::ZERO).then(|| d.amount / gross_pay),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AdjustmentMarkers, AuditRules, ColumnLabels, FieldLabels, LabelConfig, ProjectionConfig,
        SectionLabels, Tolerances,
    };
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
        let mut leave_types = HashMap::new();
        leave_types.insert(
            "Annual".to_string(),
            strs(&["Annual Leave", "Annual Lv", "AL", "Annual"]),
        );
        leave_types.insert("Sick".to_string(), strs(&["Sick Leave", "SL", "Sick"]));

        let labels = LabelConfig {
            fields: FieldLabels {
                gross_pay: strs(&["Gross Pay", "Total Gross", "Gross"]),
                net_pay: strs(&["Net Pay", "Net"]),
                remarks: strs(&["Remarks", "Notes"]),
                agency_banner: strs(&["Earnings and Leave Statement"]),
            },
            sections: SectionLabels {
                earnings: strs(&["Earnings"]),
                deductions: strs(&["Deductions"]),
                leave: strs(&["Leave"]),
            },
            columns: ColumnLabels {
                label: strs(&["Type", "Description"]),
                start: strs(&["Start", "Balance Start"]),
                earned: strs(&["Earned", "Earn"]),
                used: strs(&["Used", "Use"]),
                ending: strs(&["End", "Ending"]),
                rate: strs(&["Rate"]),
                hours: strs(&["Hours", "Hrs"]),
                amount: strs(&["Amount", "Current"]),
            },
            leave_types,
            tax_codes: strs(&["Tax", "OASDI", "Medicare"]),
        };

        let rules = AuditRules {
            tolerances: Tolerances {
                money: dec("0.01"),
                leave_minutes: dec("1"),
                tax_rate_relative: dec("0.01"),
            },
            exempt_leave_types: strs(&["Time Off Award"]),
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

    /// A statement in the banner-row layout: one big table with section
    /// banners, the way the rendered comparison view prints them.
    fn banner_statement() -> String {
        r#"
        <table>
          <tr>
            <td colspan="6"><span>Example Flight Agency</span><br><span>Earnings and Leave Statement</span></td>
            <td colspan="3"><span>For Pay Period Ending</span><br><span>2025-11-29</span></td>
            <td colspan="3"><span>Net Pay</span><br><span>$ 3,100.00</span></td>
          </tr>
          <tr><td>Gross Pay</td><td>$ 4,200.00</td></tr>
          <tr><td colspan="12">Earnings</td></tr>
          <tr><th>Type</th><th>Rate</th><th>Hours</th><th>Amount</th></tr>
          <tr><td>Regular Pay</td><td>52.50</td><td>80.00</td><td>4,200.00</td></tr>
          <tr><td colspan="12">Deductions</td></tr>
          <tr><th>Type</th><th>Amount</th></tr>
          <tr><td>Federal Tax</td><td>700.00</td></tr>
          <tr><td>OASDI</td><td>260.40</td></tr>
          <tr><td>Health Ins</td><td>139.60</td></tr>
          <tr><td>Total Deductions</td><td>1,100.00</td></tr>
          <tr><td colspan="12">Leave</td></tr>
          <tr><th>Type</th><th>Start</th><th>Earned</th><th>Used</th><th>End</th></tr>
          <tr><td>Annual Leave</td><td>40.00</td><td>4.00</td><td>8.00</td><td>36.00</td></tr>
          <tr><td>Sick Leave</td><td>20.00</td><td>4.00</td><td>0.00</td><td>24.00</td></tr>
          <tr><td>Remarks</td><td>LEAVE ADJUSTMENT - SEE HR</td></tr>
        </table>
        "#
        .to_string()
    }

    /// A statement in the separate-tables layout, the way the source
    /// system emits them: one table per section, no banner rows.
    fn separate_tables_statement() -> String {
        r#"
        <html><body>
        <table>
          <tr><td>GROSS  PAY:</td><td>$7,420.15</td></tr>
          <tr><td>net pay</td><td>$5,514.90</td></tr>
        </table>
        <table>
          <tr><th>Description</th><th>Rate</th><th>Hours</th><th>Current</th></tr>
          <tr><td>Regular</td><td>61.83</td><td>80.00</td><td>4,946.40</td></tr>
          <tr><td>Overtime</td><td>92.75</td><td>20.00</td><td>1,855.00</td></tr>
          <tr><td>Night Differential</td><td>6.18</td><td>100.00</td><td>618.75</td></tr>
        </table>
        <table>
          <tr><th>Description</th><th>Current</th></tr>
          <tr><td>Federal Tax Withholding</td><td>1,484.03</td></tr>
          <tr><td>TSP Contribution</td><td>421.22</td></tr>
        </table>
        <table>
          <tr><th>Type</th><th>Balance Start</th><th>YTD</th><th>Earn</th><th>Use</th><th>Ending</th></tr>
          <tr><td>Annual Lv</td><td>112.30</td><td>96.00</td><td>8.00</td><td>0.00</td><td>120.30</td></tr>
        </table>
        </body></html>
        "#
        .to_string()
    }

    #[test]
    fn test_parse_banner_layout_scalars() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let period = parser.parse(&banner_statement(), date("2025-11-29")).unwrap();

        assert_eq!(period.period_ending, date("2025-11-29"));
        assert_eq!(period.gross_pay, dec("4200.00"));
        assert_eq!(period.net_pay, dec("3100.00"));
        assert_eq!(period.agency.as_deref(), Some("Example Flight Agency"));
        assert_eq!(period.remarks.as_deref(), Some("LEAVE ADJUSTMENT - SEE HR"));
        assert!(!period.speculative);
    }

    #[test]
    fn test_parse_banner_layout_earnings() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let period = parser.parse(&banner_statement(), date("2025-11-29")).unwrap();

        assert_eq!(period.earnings.len(), 1);
        let regular = &period.earnings[0];
        assert_eq!(regular.category, "Regular Pay");
        assert_eq!(regular.rate, Some(dec("52.50")));
        assert_eq!(regular.hours, Some(dec("80.00")));
        assert_eq!(regular.amount, dec("4200.00"));
    }

    #[test]
    fn test_parse_banner_layout_deductions_skip_totals_row() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let period = parser.parse(&banner_statement(), date("2025-11-29")).unwrap();

        let codes: Vec<&str> = period.deductions.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["Federal Tax", "OASDI", "Health Ins"]);
        assert_eq!(period.deduction_total(), dec("1100.00"));
    }

    #[test]
    fn test_parse_banner_layout_leave_resolves_synonyms() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let period = parser.parse(&banner_statement(), date("2025-11-29")).unwrap();

        assert_eq!(period.leave.len(), 2);
        assert_eq!(period.leave[0].leave_type, "Annual");
        assert_eq!(period.leave[0].starting_balance, dec("40.00"));
        assert_eq!(period.leave[0].earned, dec("4.00"));
        assert_eq!(period.leave[0].used, dec("8.00"));
        assert_eq!(period.leave[0].ending_balance, dec("36.00"));
        assert_eq!(period.leave[1].leave_type, "Sick");
    }

    #[test]
    fn test_parse_banner_layout_derives_taxes() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let period = parser.parse(&banner_statement(), date("2025-11-29")).unwrap();

        let tax_types: Vec<&str> = period.taxes.iter().map(|t| t.tax_type.as_str()).collect();
        assert_eq!(tax_types, vec!["Federal Tax", "OASDI"]);
        let federal = period.tax("Federal Tax").unwrap();
        assert_eq!(federal.amount, dec("700.00"));
        // 700 / 4200
        assert!(federal.rate.unwrap() > dec("0.16"));
        assert!(federal.rate.unwrap() < dec("0.17"));
    }

    #[test]
    fn test_parse_separate_tables_layout() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let period = parser
            .parse(&separate_tables_statement(), date("2026-01-10"))
            .unwrap();

        assert_eq!(period.gross_pay, dec("7420.15"));
        assert_eq!(period.net_pay, dec("5514.90"));
        assert_eq!(period.earnings.len(), 3);
        assert_eq!(period.earnings[1].category, "Overtime");
        assert_eq!(period.deductions.len(), 2);
        assert_eq!(period.leave.len(), 1);
        assert_eq!(period.leave[0].leave_type, "Annual");
        assert_eq!(period.leave[0].ending_balance, dec("120.30"));
        // No remarks block at all: not-present, not empty.
        assert!(period.remarks.is_none());
    }

    #[test]
    fn test_unknown_deduction_code_still_captured() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let period = parser
            .parse(&separate_tables_statement(), date("2026-01-10"))
            .unwrap();

        assert!(period.deductions.iter().any(|d| d.code == "TSP Contribution"));
    }

    #[test]
    fn test_missing_gross_pay_is_required_field_error() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let html = "<table><tr><td>Net Pay</td><td>$100.00</td></tr></table>";
        let result = parser.parse(html, date("2025-11-29"));

        match result {
            Err(AuditError::MissingRequiredField { field }) => assert_eq!(field, "gross_pay"),
            other => panic!("Expected MissingRequiredField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_net_pay_is_required_field_error() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let html = "<table><tr><td>Gross Pay</td><td>$100.00</td></tr></table>";
        let result = parser.parse(html, date("2025-11-29"));

        match result {
            Err(AuditError::MissingRequiredField { field }) => assert_eq!(field, "net_pay"),
            other => panic!("Expected MissingRequiredField, got {:?}", other),
        }
    }

    #[test]
    fn test_document_without_tables_is_unrecognized() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        let result = parser.parse("<html><p>not a statement</p></html>", date("2025-11-29"));
        assert!(matches!(
            result,
            Err(AuditError::UnrecognizedDocumentStructure { .. })
        ));
    }

    #[test]
    fn test_label_followed_by_prose_is_not_a_value() {
        let config = create_test_config();
        let parser = DocumentParser::new(&config);

        // "Net Pay Advance" must not satisfy the net pay field with the
        // row's amount; gross and net come from the real rows.
        let html = r#"
        <table>
          <tr><td>Gross Pay</td><td>$200.00</td></tr>
          <tr><td>Net Pay</td><td>$150.00</td></tr>
        </table>
        <table>
          <tr><td colspan="2">Deductions</td></tr>
          <tr><th>Type</th><th>Amount</th></tr>
          <tr><td>Net Pay Advance</td><td>50.00</td></tr>
        </table>
        "#;
        let period = parser.parse(html, date("2025-11-29")).unwrap();
        assert_eq!(period.net_pay, dec("150.00"));
        assert_eq!(period.deductions[0].code, "Net Pay Advance");
    }

    #[test]
    fn test_parse_amount_variants() {
        assert_eq!(parse_amount("$ 4,200.00"), Some(dec("4200.00")));
        assert_eq!(parse_amount("36.00"), Some(dec("36.00")));
        assert_eq!(parse_amount("(42.00)"), Some(dec("-42.00")));
        assert_eq!(parse_amount("2025-11-29"), None);
        assert_eq!(parse_amount("Pay Advance"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_derive_taxes_skips_zero_gross_rate() {
        let deductions = vec![DeductionEntry {
            code: "Federal Tax".to_string(),
            amount: dec("10.00"),
        }];
        let taxes = derive_taxes(&deductions, Decimal::ZERO, &strs(&["Tax"]));
        assert_eq!(taxes.len(), 1);
        assert!(taxes[0].rate.is_none());
    }
}
