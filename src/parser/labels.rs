//! Fuzzy label matching.
//!
//! Statement labels drift between releases (casing, whitespace, trailing
//! colons, abbreviations), so nothing in the parser compares label text
//! directly. The [`LabelRegistry`] compiles the configured synonym lists
//! into whitespace-tolerant, case-insensitive patterns and resolves every
//! cell through them. Labels that match nothing stay in the vocabulary as
//! their own canonical category; they are never dropped.

use regex::Regex;

use crate::config::LabelConfig;

/// A line-item section of the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    /// Earnings lines (category, rate, hours, amount).
    Earnings,
    /// Deduction lines (code, amount).
    Deductions,
    /// Leave balance lines (type, start, earned, used, ending).
    Leave,
}

/// The meaning of a table column, resolved from its header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ColumnRole {
    /// The line label column ("Type", "Description").
    Label,
    /// Leave starting balance.
    Start,
    /// Leave earned this period.
    Earned,
    /// Leave used this period.
    Used,
    /// Leave ending balance.
    Ending,
    /// Pay rate.
    Rate,
    /// Hours paid.
    Hours,
    /// Current amount.
    Amount,
}

/// A scalar statement field located by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScalarField {
    /// Gross pay for the period.
    GrossPay,
    /// Net pay for the period.
    NetPay,
    /// Free-text remarks.
    Remarks,
}

/// Compiled label vocabulary.
pub(crate) struct LabelRegistry {
    gross: Vec<Regex>,
    net: Vec<Regex>,
    remarks: Vec<Regex>,
    agency_banner: Vec<Regex>,
    sections: Vec<(Section, Regex)>,
    columns: Vec<(ColumnRole, Regex)>,
    leave_types: Vec<(String, Regex)>,
    tax_codes: Vec<String>,
}

/// Builds a pattern matching a label synonym with flexible whitespace and
/// an optional trailing colon. With `capture_rest`, anything after the
/// label is captured so a label and its value can share one cell.
fn label_pattern(synonym: &str, capture_rest: bool) -> Option<Regex> {
    let tokens: Vec<String> = synonym.split_whitespace().map(regex::escape).collect();
    if tokens.is_empty() {
        return None;
    }
    let body = tokens.join(r"\s+");
    let pattern = if capture_rest {
        format!(r"(?is)^\s*{body}\s*:?\s*(?P<rest>.*?)\s*$")
    } else {
        format!(r"(?is)^\s*{body}\s*:?\s*$")
    };
    Regex::new(&pattern).ok()
}

/// Compiles a synonym list, longest synonym first so "Gross Pay" wins
/// over "Gross" when both would match.
fn compile(synonyms: &[String], capture_rest: bool) -> Vec<Regex> {
    let mut sorted: Vec<&String> = synonyms.iter().collect();
    sorted.sort_by_key(|s| std::cmp::Reverse(s.len()));
    sorted
        .into_iter()
        .filter_map(|s| label_pattern(s, capture_rest))
        .collect()
}

impl LabelRegistry {
    /// Compiles the registry from the label configuration.
    pub(crate) fn new(config: &LabelConfig) -> Self {
        let columns = [
            (ColumnRole::Label, &config.columns.label),
            (ColumnRole::Start, &config.columns.start),
            (ColumnRole::Earned, &config.columns.earned),
            (ColumnRole::Used, &config.columns.used),
            (ColumnRole::Ending, &config.columns.ending),
            (ColumnRole::Rate, &config.columns.rate),
            (ColumnRole::Hours, &config.columns.hours),
            (ColumnRole::Amount, &config.columns.amount),
        ]
        .into_iter()
        .flat_map(|(role, synonyms)| compile(synonyms, false).into_iter().map(move |r| (role, r)))
        .collect();

        let sections = [
            (Section::Earnings, &config.sections.earnings),
            (Section::Deductions, &config.sections.deductions),
            (Section::Leave, &config.sections.leave),
        ]
        .into_iter()
        .flat_map(|(sec, synonyms)| compile(synonyms, false).into_iter().map(move |r| (sec, r)))
        .collect();

        let leave_types = config
            .leave_types
            .iter()
            .flat_map(|(canonical, synonyms)| {
                compile(synonyms, false)
                    .into_iter()
                    .map(move |r| (canonical.clone(), r))
            })
            .collect();

        Self {
            gross: compile(&config.fields.gross_pay, true),
            net: compile(&config.fields.net_pay, true),
            remarks: compile(&config.fields.remarks, true),
            agency_banner: compile(&config.fields.agency_banner, false),
            sections,
            columns,
            leave_types,
            tax_codes: config.tax_codes.iter().map(|c| c.to_lowercase()).collect(),
        }
    }

    /// Matches a cell against the scalar field labels. Returns the field
    /// and the text found after the label within the same cell, if any.
    pub(crate) fn scalar_value(&self, cell: &str) -> Option<(ScalarField, Option<String>)> {
        let fields = [
            (ScalarField::GrossPay, &self.gross),
            (ScalarField::NetPay, &self.net),
            (ScalarField::Remarks, &self.remarks),
        ];
        for (field, patterns) in fields {
            for pattern in patterns {
                if let Some(caps) = pattern.captures(cell) {
                    let rest = caps
                        .name("rest")
                        .map(|m| m.as_str().trim())
                        .filter(|s| !s.is_empty())
                        .map(|s| s.to_string());
                    return Some((field, rest));
                }
            }
        }
        None
    }

    /// Matches a banner cell against the section names.
    pub(crate) fn section_of(&self, cell: &str) -> Option<Section> {
        self.sections
            .iter()
            .find(|(_, pattern)| pattern.is_match(cell))
            .map(|(section, _)| *section)
    }

    /// Matches a header cell against the column names.
    pub(crate) fn column_role(&self, cell: &str) -> Option<ColumnRole> {
        self.columns
            .iter()
            .find(|(_, pattern)| pattern.is_match(cell))
            .map(|(role, _)| *role)
    }

    /// Resolves a leave type label to its canonical identifier; an
    /// unmatched label becomes its own new canonical type.
    pub(crate) fn canonical_leave_type(&self, label: &str) -> String {
        self.leave_types
            .iter()
            .find(|(_, pattern)| pattern.is_match(label))
            .map(|(canonical, _)| canonical.clone())
            .unwrap_or_else(|| label.trim().to_string())
    }

    /// True when a deduction code names a tax withholding.
    pub(crate) fn is_tax_code(&self, code: &str) -> bool {
        let code = code.to_lowercase();
        self.tax_codes.iter().any(|t| code.contains(t))
    }

    /// True when a line matches the statement banner (the agency name is
    /// printed on the line above it).
    pub(crate) fn is_agency_banner(&self, line: &str) -> bool {
        self.agency_banner.iter().any(|p| p.is_match(line))
    }
}
