//! Core data models for the paystub audit engine.
//!
//! This module contains all the domain models used throughout the engine.

mod finding;
mod pay_period;

pub use finding::{Finding, FindingKind, Severity};
pub use pay_period::{DeductionEntry, EarningEntry, LeaveEntry, PayPeriod, TaxEntry};
