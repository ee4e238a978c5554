//! HTTP request handlers for the paystub audit API.
//!
//! This module contains the handler functions for all API endpoints:
//! ingestion, audit reports, the gross/net trend series, shadow record
//! entry, and reconciliation.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::{audit_arithmetic, audit_continuity};
use crate::shadow::{reconcile, record_shadow};
use crate::store::PeriodStore;

use super::request::{IngestRequest, ReconcileRequest, ShadowRequest};
use super::response::{ApiError, ApiErrorResponse, AuditReport, ReconcileResponse, TrendPoint};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ingest", post(ingest_handler))
        .route("/report/:date", get(report_handler))
        .route("/trends", get(trends_handler))
        .route("/shadow", post(shadow_handler))
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into an API error response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Builds the audit report for a period already in the store.
///
/// Findings are recomputed on demand from the stored record and its
/// chronological predecessor; they are reporting, not stored state.
fn build_report(store: &PeriodStore, date: NaiveDate, state: &AppState) -> Option<AuditReport> {
    let period = store.get(date)?;
    let previous = store.previous(date);
    Some(AuditReport {
        arithmetic_findings: audit_arithmetic(period, state.config()),
        continuity_findings: audit_continuity(period, previous, state.config()),
        period: period.clone(),
    })
}

/// Handler for POST /ingest.
///
/// Parses one statement document, replaces the record under its date,
/// and responds with the stored period plus both audit finding lists. A
/// parse failure aborts the ingestion of that one document and leaves
/// the store untouched.
async fn ingest_handler(
    State(state): State<AppState>,
    payload: Result<Json<IngestRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    info!(
        correlation_id = %correlation_id,
        period_ending = %request.period_ending,
        "Processing ingestion request"
    );

    let mut period = match state.parser().parse(&request.html, request.period_ending) {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Parse failed");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };
    period.file_source = request.file_source;

    let mut store = state.store().write().await;
    store.put(period);
    let report = build_report(&store, request.period_ending, &state);
    drop(store);

    match report {
        Some(report) => {
            info!(
                correlation_id = %correlation_id,
                period_ending = %request.period_ending,
                arithmetic_findings = report.arithmetic_findings.len(),
                continuity_findings = report.continuity_findings.len(),
                "Ingestion completed"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        None => {
            let api_error: ApiErrorResponse = crate::error::AuditError::PeriodNotFound {
                date: request.period_ending,
            }
            .into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /report/{date}.
async fn report_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    let store = state.store().read().await;
    match build_report(&store, date, &state) {
        Some(report) => (StatusCode::OK, Json(report)).into_response(),
        None => {
            let api_error: ApiErrorResponse =
                crate::error::AuditError::PeriodNotFound { date }.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /trends.
///
/// Pure read over stored data, in ascending date order, for the chart
/// renderer.
async fn trends_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store().read().await;
    let series: Vec<TrendPoint> = store
        .all()
        .map(|p| TrendPoint {
            date: p.period_ending,
            gross: p.gross_pay,
            net: p.net_pay,
        })
        .collect();
    (StatusCode::OK, Json(series))
}

/// Handler for POST /shadow.
async fn shadow_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShadowRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    info!(
        correlation_id = %correlation_id,
        period_ending = %request.period_ending,
        "Recording shadow period"
    );

    let mut store = state.store().write().await;
    let shadow = match record_shadow(
        &store,
        request.period_ending,
        &request.hours_by_category,
        state.config(),
    ) {
        Ok(shadow) => shadow,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Shadow projection failed");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };
    store.put(shadow.clone());

    (StatusCode::OK, Json(shadow)).into_response()
}

/// Handler for POST /reconcile.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    info!(
        correlation_id = %correlation_id,
        actual_date = %request.actual_date,
        named_records = request.speculative_dates.len(),
        "Processing reconciliation"
    );

    let mut store = state.store().write().await;
    match reconcile(
        &mut store,
        &request.speculative_dates,
        request.actual_date,
        state.config(),
    ) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                reconciled = outcome.reconciled_dates.len(),
                delta = outcome.finding.is_some(),
                "Reconciliation completed"
            );
            let response = ReconcileResponse {
                reconciled_dates: outcome.reconciled_dates,
                finding: outcome.finding,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Reconciliation failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
