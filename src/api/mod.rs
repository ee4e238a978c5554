//! HTTP API module for the paystub audit engine.
//!
//! This module provides the REST endpoints consumed by the dashboard
//! renderer: document ingestion, per-period audit reports, the gross/net
//! trend series, shadow record entry, and reconciliation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{IngestRequest, ReconcileRequest, ShadowRequest};
pub use response::{ApiError, AuditReport, ReconcileResponse, TrendPoint};
pub use state::AppState;
