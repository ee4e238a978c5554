//! Configuration types for the paystub audit engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Comparison tolerances used by the auditors.
///
/// These exist to absorb rounding noise in real statements, not to excuse
/// policy changes; each default matches the behavior of the system this
/// engine replaces and is documented in `config/default/audit.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Tolerances {
    /// Absolute tolerance for monetary comparisons (gross/net/lump-sum).
    pub money: Decimal,
    /// Absolute tolerance, in minutes, for leave balance arithmetic.
    pub leave_minutes: Decimal,
    /// Relative tolerance for effective tax rate comparisons.
    pub tax_rate_relative: Decimal,
}

/// Remark phrases that explain one-off administrative corrections.
///
/// A phrase only downgrades findings in the category it references: a
/// leave marker never suppresses a net-pay mismatch.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustmentMarkers {
    /// Phrases that explain leave balance corrections.
    pub leave: Vec<String>,
    /// Phrases that explain gross/net pay corrections.
    pub pay: Vec<String>,
}

/// Settings for projecting shadow records during payment interruptions.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionConfig {
    /// The earnings category whose rate anchors a projection
    /// (e.g., "Regular"). Matched as a case-insensitive substring.
    pub base_category: String,
}

/// Audit rules loaded from `audit.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditRules {
    /// Comparison tolerances.
    pub tolerances: Tolerances,
    /// Leave types whose balances are never audited (administrative
    /// categories the issuer does not keep continuous).
    pub exempt_leave_types: Vec<String>,
    /// Adjustment remark phrases, per finding category.
    pub adjustment_markers: AdjustmentMarkers,
    /// Shadow projection settings.
    pub projection: ProjectionConfig,
}

/// Label synonyms for the scalar statement fields.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldLabels {
    /// Synonyms for the gross pay label.
    pub gross_pay: Vec<String>,
    /// Synonyms for the net pay label.
    pub net_pay: Vec<String>,
    /// Synonyms for the remarks label.
    pub remarks: Vec<String>,
    /// Statement banner lines; the line printed above one of these in the
    /// document header is taken as the issuing agency name.
    pub agency_banner: Vec<String>,
}

/// Label synonyms for the statement's line-item sections.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionLabels {
    /// Synonyms for the earnings section banner.
    pub earnings: Vec<String>,
    /// Synonyms for the deductions section banner.
    pub deductions: Vec<String>,
    /// Synonyms for the leave section banner.
    pub leave: Vec<String>,
}

/// Label synonyms for table column headers.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnLabels {
    /// Synonyms for the line label column ("Type", "Description", ...).
    pub label: Vec<String>,
    /// Synonyms for the leave starting balance column.
    pub start: Vec<String>,
    /// Synonyms for the leave earned column.
    pub earned: Vec<String>,
    /// Synonyms for the leave used column.
    pub used: Vec<String>,
    /// Synonyms for the leave ending balance column.
    pub ending: Vec<String>,
    /// Synonyms for the rate column.
    pub rate: Vec<String>,
    /// Synonyms for the hours column.
    pub hours: Vec<String>,
    /// Synonyms for the current amount column.
    pub amount: Vec<String>,
}

/// Label configuration loaded from `labels.yaml`.
///
/// Leave types and tax codes are open vocabularies: the maps here resolve
/// known spellings to canonical identifiers, and any unmatched label
/// becomes its own new canonical category rather than being dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelConfig {
    /// Scalar field labels.
    pub fields: FieldLabels,
    /// Section banner labels.
    pub sections: SectionLabels,
    /// Column header labels.
    pub columns: ColumnLabels,
    /// Map of canonical leave type to known synonym spellings.
    pub leave_types: HashMap<String, Vec<String>>,
    /// Substring patterns identifying tax deductions.
    pub tax_codes: Vec<String>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Audit rules.
    rules: AuditRules,
    /// Label vocabulary.
    labels: LabelConfig,
}

impl AuditConfig {
    /// Creates a new AuditConfig from its component parts.
    pub fn new(rules: AuditRules, labels: LabelConfig) -> Self {
        Self { rules, labels }
    }

    /// Returns the audit rules.
    pub fn rules(&self) -> &AuditRules {
        &self.rules
    }

    /// Returns the label vocabulary.
    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }
}
