//! Pay period model and its line-item entry types.
//!
//! This module contains the [`PayPeriod`] type, one record per
//! pay-period-end date, together with the entry types for earnings,
//! deductions, leave balances, and taxes extracted from a statement.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One earnings line on a statement.
///
/// Earnings categories form an open set: any category printed on a
/// statement is captured verbatim, known or not. The `rate` of the base
/// category is what shadow projections are built from during payment
/// interruptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningEntry {
    /// The earnings category as printed (e.g., "Regular Pay", "Overtime").
    pub category: String,
    /// The hourly rate for this category, when the statement prints one.
    pub rate: Option<Decimal>,
    /// The hours paid under this category, when printed.
    pub hours: Option<Decimal>,
    /// The amount paid under this category for the current period.
    pub amount: Decimal,
}

/// One deduction line on a statement.
///
/// Deduction codes form an open set; a code never seen before is still
/// captured, which is what lets the continuity audit notice it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionEntry {
    /// The deduction code as printed (e.g., "Federal Tax", "Health Ins").
    pub code: String,
    /// The amount deducted for the current period.
    pub amount: Decimal,
}

/// One leave balance line on a statement.
///
/// Balances use the statement's hours.minutes dotted notation: `8.50`
/// means 8 hours 50 minutes, not eight and a half hours. Arithmetic over
/// these values must go through [`crate::audit::to_minutes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// The canonical leave type (e.g., "Annual", "Sick").
    pub leave_type: String,
    /// The balance carried into the period.
    pub starting_balance: Decimal,
    /// Hours earned during the period.
    pub earned: Decimal,
    /// Hours used during the period.
    pub used: Decimal,
    /// The balance reported at the end of the period.
    pub ending_balance: Decimal,
}

/// One tax line, derived from the deductions whose codes match the
/// configured tax patterns.
///
/// The `rate` is the effective rate against gross pay for the period;
/// it is `None` when gross pay is zero and no rate can be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEntry {
    /// The tax type as printed (e.g., "Federal Tax", "OASDI").
    pub tax_type: String,
    /// The amount withheld for the current period.
    pub amount: Decimal,
    /// The effective rate (amount / gross), when computable.
    pub rate: Option<Decimal>,
}

/// One pay period, keyed by its pay-period-end date.
///
/// A `PayPeriod` is created either by parsing a statement document
/// (non-speculative) or by entering a shadow record during a payment
/// interruption (speculative). Re-ingesting the same date replaces the
/// record wholesale; reconciliation flips `reconciled` on a speculative
/// record and nothing else mutates a stored period.
///
/// # Example
///
/// ```
/// use paystub_audit::models::PayPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2025, 11, 29).unwrap(),
///     Decimal::from_str("4200.00").unwrap(),
///     Decimal::from_str("3100.00").unwrap(),
/// );
/// assert!(!period.speculative);
/// assert_eq!(period.deduction_total(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The pay-period-end date; unique key across the store.
    pub period_ending: NaiveDate,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Net pay for the period.
    pub net_pay: Decimal,
    /// The issuing agency banner, when the statement prints one.
    pub agency: Option<String>,
    /// Earnings lines in statement order.
    #[serde(default)]
    pub earnings: Vec<EarningEntry>,
    /// Deduction lines in statement order.
    #[serde(default)]
    pub deductions: Vec<DeductionEntry>,
    /// Leave balance lines in statement order.
    #[serde(default)]
    pub leave: Vec<LeaveEntry>,
    /// Tax lines derived from the deductions.
    #[serde(default)]
    pub taxes: Vec<TaxEntry>,
    /// Free-text remarks; `None` when the statement has no remarks block,
    /// which is distinct from an empty block.
    pub remarks: Option<String>,
    /// True when this record is a projection entered during a payment
    /// interruption rather than a parsed statement.
    #[serde(default)]
    pub speculative: bool,
    /// True once a speculative record has been matched to a real payout.
    #[serde(default)]
    pub reconciled: bool,
    /// The source file name, supplied by the caller alongside the date.
    pub file_source: Option<String>,
}

impl PayPeriod {
    /// Creates a minimal non-speculative period with the required fields.
    pub fn new(period_ending: NaiveDate, gross_pay: Decimal, net_pay: Decimal) -> Self {
        Self {
            period_ending,
            gross_pay,
            net_pay,
            agency: None,
            earnings: Vec::new(),
            deductions: Vec::new(),
            leave: Vec::new(),
            taxes: Vec::new(),
            remarks: None,
            speculative: false,
            reconciled: false,
            file_source: None,
        }
    }

    /// Sum of all deduction amounts for the period.
    pub fn deduction_total(&self) -> Decimal {
        self.deductions.iter().map(|d| d.amount).sum()
    }

    /// Sum of all earnings amounts for the period.
    pub fn earnings_total(&self) -> Decimal {
        self.earnings.iter().map(|e| e.amount).sum()
    }

    /// Looks up an earnings line by category, ignoring ASCII case.
    pub fn earning(&self, category: &str) -> Option<&EarningEntry> {
        self.earnings
            .iter()
            .find(|e| e.category.eq_ignore_ascii_case(category))
    }

    /// Looks up a tax line by type, ignoring ASCII case.
    pub fn tax(&self, tax_type: &str) -> Option<&TaxEntry> {
        self.taxes
            .iter()
            .find(|t| t.tax_type.eq_ignore_ascii_case(tax_type))
    }

    /// True when the period is a speculative record that has not yet been
    /// matched to a real payout.
    pub fn awaiting_reconciliation(&self) -> bool {
        self.speculative && !self.reconciled
    }
}
