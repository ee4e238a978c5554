//! Request types for the paystub audit API.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Request body for `POST /ingest`.
///
/// One document is one pay period; the pay-period-end date is derived
/// from the file name by the caller and supplied here explicitly, never
/// parsed out of the document content.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestRequest {
    /// The pay-period-end date for the document.
    pub period_ending: NaiveDate,
    /// The raw statement document.
    pub html: String,
    /// The originating file name, recorded on the stored period.
    #[serde(default)]
    pub file_source: Option<String>,
}

/// Request body for `POST /shadow`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShadowRequest {
    /// The pay-period-end date of the missed period.
    pub period_ending: NaiveDate,
    /// Hours worked, keyed by earnings category.
    pub hours_by_category: BTreeMap<String, Decimal>,
}

/// Request body for `POST /reconcile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconcileRequest {
    /// The pay-period-end date of the actual payout.
    pub actual_date: NaiveDate,
    /// Specific speculative record dates to reconcile; empty selects
    /// every unreconciled speculative record dated on or before the
    /// payout.
    #[serde(default)]
    pub speculative_dates: Vec<NaiveDate>,
}
