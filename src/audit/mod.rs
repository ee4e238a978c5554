//! Audit passes for the paystub audit engine.
//!
//! This module contains the two audit passes run over every stored
//! period: the arithmetic audit, which validates intra-period identities
//! (leave balance math, gross/net math), and the continuity audit, which
//! compares a period against its immediate predecessor to surface newly
//! appeared deduction codes and tax-rate shifts. Both passes are pure
//! reporting; findings never prevent a period from being stored.

mod arithmetic;
mod continuity;

pub use arithmetic::{audit_arithmetic, to_dotted, to_minutes};
pub use continuity::audit_continuity;
