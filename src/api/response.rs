//! Response types for the paystub audit API.
//!
//! This module defines the success payloads consumed by the dashboard
//! renderer and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AuditError;
use crate::models::{Finding, PayPeriod};

/// The audit report for one period, as consumed by the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// The stored period.
    pub period: PayPeriod,
    /// Intra-period arithmetic findings.
    pub arithmetic_findings: Vec<Finding>,
    /// Period-to-predecessor continuity findings.
    pub continuity_findings: Vec<Finding>,
}

/// One point of the gross/net trend series.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    /// The pay-period-end date.
    pub date: NaiveDate,
    /// Gross pay for the period.
    pub gross: Decimal,
    /// Net pay for the period.
    pub net: Decimal,
}

/// Response body for `POST /reconcile`.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileResponse {
    /// The speculative record dates that were marked reconciled.
    pub reconciled_dates: Vec<NaiveDate>,
    /// The lump-sum delta finding, when projections and payout disagree.
    pub finding: Option<Finding>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AuditError> for ApiErrorResponse {
    fn from(error: AuditError) -> Self {
        match error {
            AuditError::MissingRequiredField { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_REQUIRED_FIELD",
                    format!("Required field not found in document: {}", field),
                    "Gross pay, net pay, and the period end date are required for auditing",
                ),
            },
            AuditError::UnrecognizedDocumentStructure { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNRECOGNIZED_DOCUMENT",
                    "Document does not look like a paystub statement",
                    message,
                ),
            },
            AuditError::PeriodNotFound { date } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "PERIOD_NOT_FOUND",
                    format!("No pay period stored for {}", date),
                ),
            },
            AuditError::NoRateBasis { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NO_RATE_BASIS",
                    format!("No rate basis available for shadow record dated {}", date),
                    "A shadow record needs an earlier statement with a usable pay rate",
                ),
            },
            AuditError::NoUnreconciledRecords { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "NO_UNRECONCILED_RECORDS",
                    format!("No unreconciled speculative records on or before {}", date),
                ),
            },
            AuditError::InvalidReconciliation { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_RECONCILIATION", message),
            },
            AuditError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            AuditError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_missing_field_maps_to_bad_request() {
        let engine_error = AuditError::MissingRequiredField {
            field: "gross_pay".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "MISSING_REQUIRED_FIELD");
    }

    #[test]
    fn test_period_not_found_maps_to_not_found() {
        let engine_error = AuditError::PeriodNotFound {
            date: NaiveDate::from_ymd_opt(2025, 11, 29).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "PERIOD_NOT_FOUND");
    }

    #[test]
    fn test_config_error_maps_to_internal() {
        let engine_error = AuditError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
