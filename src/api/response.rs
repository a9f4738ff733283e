//! Response types for the severance calculator API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from [`EngineError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RegulationMetadata;
use crate::error::EngineError;
use crate::models::{
    AuditTrace, CompensationInput, CompensationResult, TenureDuration, TerminationReason,
};
use crate::presentation::BreakdownLine;

/// The prefilled consultation message and the link that sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    /// Message text.
    pub message: String,
    /// Chat link with the message as its `text` parameter.
    pub link: String,
}

/// Response body of `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorResponse {
    /// Unique identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was made.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that made it.
    pub engine_version: String,
    /// The tenure after normalization.
    pub tenure: TenureDuration,
    /// The calculator input after normalization.
    pub input: CompensationInput,
    /// The computed payments.
    pub result: CompensationResult,
    /// Formatted lines for display.
    pub breakdown: Vec<BreakdownLine>,
    /// Message and link for contacting a consultant.
    pub consultation: Consultation,
    /// The regulation the tables follow.
    pub regulation: RegulationMetadata,
    /// How the result was derived.
    pub audit_trace: AuditTrace,
}

/// One entry of `GET /termination-reasons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationReasonOption {
    /// Wire value to send back in `reason`.
    pub value: String,
    /// Indonesian display label.
    pub label: String,
}

impl From<TerminationReason> for TerminationReasonOption {
    fn from(reason: TerminationReason) -> Self {
        Self {
            value: reason.as_str().to_string(),
            label: reason.label().to_string(),
        }
    }
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the service answers.
    pub status: String,
    /// Engine version.
    pub version: String,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown termination reason error response listing the
    /// accepted values.
    pub fn unknown_termination_reason(value: &str) -> Self {
        let accepted: Vec<&str> = TerminationReason::ALL.iter().map(|r| r.as_str()).collect();
        Self::with_details(
            "UNKNOWN_TERMINATION_REASON",
            format!("Unknown termination reason: {}", value),
            format!("Accepted values: {}", accepted.join(", ")),
        )
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::UnknownTerminationReason { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unknown_termination_reason(&value),
            },
        }
    }
}
