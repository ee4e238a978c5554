//! Time-ordered storage of pay periods.
//!
//! The [`PeriodStore`] owns the pay period collection exclusively; the
//! parser and the reconciler only produce and consume records passed
//! through it. Records are keyed by pay-period-end date in a sorted map,
//! so "previous period" lookups are by date order no matter what order
//! documents were ingested in.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{AuditError, AuditResult};
use crate::models::PayPeriod;

/// Append/update store of pay periods, keyed by pay-period-end date.
///
/// Replacement is total: a `put` under an existing date discards every
/// field of the prior record, never merging two documents' data. The
/// store itself is single-writer; callers that share it across tasks
/// wrap it in one lock so a replacement is atomic with respect to
/// readers.
///
/// # Example
///
/// ```
/// use paystub_audit::store::PeriodStore;
/// use paystub_audit::models::PayPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut store = PeriodStore::new();
/// let date = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
/// store.put(PayPeriod::new(date, Decimal::ONE, Decimal::ONE));
/// assert!(store.get(date).is_some());
/// assert!(store.previous(date).is_none());
/// ```
#[derive(Debug, Default)]
pub struct PeriodStore {
    periods: BTreeMap<NaiveDate, PayPeriod>,
}

impl PeriodStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record under its pay-period-end date.
    ///
    /// Replacement is wholesale; no field of a prior record under the
    /// same date survives.
    pub fn put(&mut self, period: PayPeriod) {
        self.periods.insert(period.period_ending, period);
    }

    /// Returns the record under the given date, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&PayPeriod> {
        self.periods.get(&date)
    }

    /// Returns the record with the greatest pay-period-end date strictly
    /// less than `date`, regardless of insertion order.
    pub fn previous(&self, date: NaiveDate) -> Option<&PayPeriod> {
        self.periods.range(..date).next_back().map(|(_, p)| p)
    }

    /// Returns all records in ascending date order.
    pub fn all(&self) -> impl Iterator<Item = &PayPeriod> {
        self.periods.values()
    }

    /// Returns the most recent record on file.
    pub fn latest(&self) -> Option<&PayPeriod> {
        self.periods.values().next_back()
    }

    /// Returns the number of records on file.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// True when no records are on file.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Finds the most recent non-speculative record strictly before
    /// `date` that carries a usable pay rate: an earnings line whose
    /// category contains `base_category` (ASCII case-insensitive) with a
    /// positive rate.
    ///
    /// This is the history fallback used during payment interruptions:
    /// a projection is anchored to the last statement that actually
    /// printed a rate, however far back that is.
    pub fn reference_for(&self, date: NaiveDate, base_category: &str) -> Option<&PayPeriod> {
        let base = base_category.to_lowercase();
        self.periods
            .range(..date)
            .rev()
            .map(|(_, p)| p)
            .find(|p| !p.speculative && base_rate_of(p, &base).is_some())
    }

    /// Marks the record under `date` as reconciled.
    pub fn mark_reconciled(&mut self, date: NaiveDate) -> AuditResult<()> {
        let period = self
            .periods
            .get_mut(&date)
            .ok_or(AuditError::PeriodNotFound { date })?;
        period.reconciled = true;
        Ok(())
    }
}

/// The positive rate of the period's base-category earnings line, if any.
/// `base` must already be lowercased.
pub(crate) fn base_rate_of(period: &PayPeriod, base: &str) -> Option<Decimal> {
    period
        .earnings
        .iter()
        .filter(|e| e.category.to_lowercase().contains(base))
        .filter_map(|e| e.rate)
        .find(|r| *r > Decimal::ZERO)
}
