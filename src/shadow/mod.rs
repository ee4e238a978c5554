//! Shadow ledger for payment interruptions.
//!
//! When payouts stop (a funding lapse, a payroll system outage), the user
//! keeps entering worked hours. Each entry becomes a speculative
//! [`PayPeriod`] projected from the most recent statement that printed a
//! usable pay rate. When a real payout finally lands, possibly one lump
//! sum covering several missed periods, the speculative records are
//! reconciled against it: their projected grosses are summed, the delta
//! against the actual payout is reported, and the records are marked
//! settled regardless of the delta, because the official total is
//! authoritative and projection noise must not block it.
//!
//! The state machine per speculative record is `Speculative → Reconciled`
//! and nothing else; a reconciled record is terminal.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::AuditConfig;
use crate::error::{AuditError, AuditResult};
use crate::models::{EarningEntry, Finding, FindingKind, PayPeriod, Severity};
use crate::parser::derive_taxes;
use crate::store::{PeriodStore, base_rate_of};

/// The result of a reconciliation action.
#[derive(Debug, Clone)]
pub struct ReconciliationOutcome {
    /// The speculative record dates that were marked reconciled.
    pub reconciled_dates: Vec<NaiveDate>,
    /// The lump-sum delta finding, when the projections and the actual
    /// payout disagree beyond tolerance.
    pub finding: Option<Finding>,
}

/// Projects a speculative pay period from entered hours.
///
/// Rates are pulled from the most recent non-speculative period before
/// `period_ending` that printed a usable base rate (the history fallback
/// for interruptions). Each hour category is paid at the rate of the
/// matching earnings category on that reference statement, falling back
/// to the base rate for categories the reference never printed.
/// Deductions are carried over from the reference verbatim; during an
/// interruption they are the best available guess.
///
/// # Arguments
///
/// * `store` - The period store to pull the rate basis from.
/// * `period_ending` - The pay-period-end date of the missed period.
/// * `hours_by_category` - Hours worked, keyed by earnings category.
///
/// # Returns
///
/// The projected period with `speculative` set, or `NoRateBasis` when no
/// prior period carries a usable rate. The caller decides whether to
/// `put` the result; this function does not write to the store.
pub fn record_shadow(
    store: &PeriodStore,
    period_ending: NaiveDate,
    hours_by_category: &BTreeMap<String, Decimal>,
    config: &AuditConfig,
) -> AuditResult<PayPeriod> {
    let base_category = &config.rules().projection.base_category;
    let reference = store
        .reference_for(period_ending, base_category)
        .ok_or(AuditError::NoRateBasis {
            date: period_ending,
        })?;
    let base_rate = base_rate_of(reference, &base_category.to_lowercase()).ok_or(
        AuditError::NoRateBasis {
            date: period_ending,
        },
    )?;

    let mut earnings = Vec::new();
    for (category, hours) in hours_by_category {
        let rate = reference
            .earning(category)
            .and_then(|e| e.rate)
            .filter(|r| *r > Decimal::ZERO)
            .unwrap_or(base_rate);
        earnings.push(EarningEntry {
            category: category.clone(),
            rate: Some(rate),
            hours: Some(*hours),
            amount: (*hours * rate).round_dp(2),
        });
    }

    let gross_pay: Decimal = earnings.iter().map(|e| e.amount).sum();
    let deductions = reference.deductions.clone();
    let deduction_total: Decimal = deductions.iter().map(|d| d.amount).sum();
    let taxes = derive_taxes(&deductions, gross_pay, &config.labels().tax_codes);

    Ok(PayPeriod {
        period_ending,
        gross_pay,
        net_pay: gross_pay - deduction_total,
        agency: reference.agency.clone(),
        earnings,
        deductions,
        leave: Vec::new(),
        taxes,
        remarks: Some(format!(
            "PROJECTED from statement dated {}",
            reference.period_ending
        )),
        speculative: true,
        reconciled: false,
        file_source: None,
    })
}

/// Reconciles speculative records against a real payout.
///
/// With an empty `speculative_dates`, every unreconciled speculative
/// record dated on or before the payout is selected; an explicit list is
/// validated instead. The selected projections are summed and compared
/// to the payout's gross: a disagreement beyond the money tolerance
/// produces a `LumpSumDelta` finding, but reconciliation proceeds either
/// way and every selected record is marked reconciled; the real payout
/// is authoritative.
///
/// # Errors
///
/// * `PeriodNotFound` - the payout date or a named speculative date is
///   not on file.
/// * `InvalidReconciliation` - the payout is itself speculative, or a
///   named record is not an unreconciled speculative record.
/// * `NoUnreconciledRecords` - nothing is eligible to reconcile.
pub fn reconcile(
    store: &mut PeriodStore,
    speculative_dates: &[NaiveDate],
    actual_date: NaiveDate,
    config: &AuditConfig,
) -> AuditResult<ReconciliationOutcome> {
    let actual = store
        .get(actual_date)
        .ok_or(AuditError::PeriodNotFound { date: actual_date })?;
    if actual.speculative {
        return Err(AuditError::InvalidReconciliation {
            message: format!("payout period {actual_date} is itself speculative"),
        });
    }
    let actual_gross = actual.gross_pay;

    let selected: Vec<NaiveDate> = if speculative_dates.is_empty() {
        store
            .all()
            .filter(|p| p.awaiting_reconciliation() && p.period_ending <= actual_date)
            .map(|p| p.period_ending)
            .collect()
    } else {
        for &date in speculative_dates {
            let period = store.get(date).ok_or(AuditError::PeriodNotFound { date })?;
            if !period.speculative {
                return Err(AuditError::InvalidReconciliation {
                    message: format!("period {date} is not speculative"),
                });
            }
            if period.reconciled {
                return Err(AuditError::InvalidReconciliation {
                    message: format!("period {date} is already reconciled"),
                });
            }
        }
        speculative_dates.to_vec()
    };

    if selected.is_empty() {
        return Err(AuditError::NoUnreconciledRecords { date: actual_date });
    }

    let expected_sum: Decimal = selected
        .iter()
        .filter_map(|d| store.get(*d))
        .map(|p| p.gross_pay)
        .sum();

    let finding = ((expected_sum - actual_gross).abs() > config.rules().tolerances.money).then(
        || Finding {
            kind: FindingKind::LumpSumDelta,
            severity: Severity::Warning,
            field: "gross_pay".to_string(),
            expected: Some(expected_sum),
            reported: Some(actual_gross),
            message: format!(
                "{} speculative record(s) project {}, actual payout gross is {}",
                selected.len(),
                expected_sum,
                actual_gross
            ),
        },
    );

    for &date in &selected {
        store.mark_reconciled(date)?;
    }

    Ok(ReconciliationOutcome {
        reconciled_dates: selected,
        finding,
    })
}
