//! HTTP request handlers for the severance calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_compensation;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{CompensationInput, TenureDuration, TerminationReason};
use crate::presentation::{
    breakdown_lines, consultation_link, consultation_message, render_summary,
};

use super::request::CalculatorRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculatorResponse, Consultation, HealthResponse,
    TerminationReasonOption,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/summary", post(summary_handler))
        .route("/termination-reasons", get(termination_reasons_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Normalizes the form, computes the compensation and returns the result
/// with its formatted breakdown, consultation link and audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculatorRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match extract_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_calculation(&request, state.config()) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                total_months = response.input.total_months,
                reason = %response.input.termination_reason,
                total = %response.result.total,
                duration_us = response.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /calculate/summary.
///
/// Returns the printable plain-text summary for the same form as
/// `/calculate`.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculatorRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match extract_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let (tenure, input) = match request.normalize() {
        Ok(normalized) => normalized,
        Err(err) => return error_response(err, correlation_id),
    };

    let calculation = calculate_compensation(&input);
    let summary = render_summary(
        &tenure,
        &input,
        &calculation.result,
        state.config().regulation(),
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        summary,
    )
        .into_response()
}

/// Handler for GET /termination-reasons.
async fn termination_reasons_handler() -> Json<Vec<TerminationReasonOption>> {
    Json(
        TerminationReason::ALL
            .into_iter()
            .map(TerminationReasonOption::from)
            .collect(),
    )
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Unwraps the JSON body or builds the 400 response describing why it was rejected.
fn extract_request(
    payload: Result<Json<CalculatorRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CalculatorRequest, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err((
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response())
}

fn error_response(err: crate::error::EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Normalizes the request and assembles the full calculation response.
fn perform_calculation(
    request: &CalculatorRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculatorResponse> {
    let (tenure, input) = request.normalize()?;
    Ok(build_response(tenure, input, config))
}

fn build_response(
    tenure: TenureDuration,
    input: CompensationInput,
    config: &ConfigLoader,
) -> CalculatorResponse {
    let start_time = Instant::now();
    let calculation = calculate_compensation(&input);
    let duration_us = start_time.elapsed().as_micros() as u64;

    let message = consultation_message(&tenure, &input, &calculation.result);
    let link = consultation_link(config.contact(), &message);

    CalculatorResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tenure,
        input,
        result: calculation.result,
        breakdown: breakdown_lines(&calculation.result),
        consultation: Consultation { message, link },
        regulation: config.regulation().clone(),
        audit_trace: calculation.audit_trace(duration_us),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/pesangon").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: &str) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let response = post_json(
            "/calculate",
            r#"{"years": 3, "months": 0, "salary": "5.000.000", "reason": "efisiensi"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: CalculatorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.input.total_months, 36);
        assert_eq!(result.result.total, Decimal::from(34_500_000));
        assert_eq!(result.breakdown.len(), 4);
        assert_eq!(result.audit_trace.steps.len(), 3);
        assert!(result.consultation.link.starts_with("https://wa.me/"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_json("/calculate", "{invalid json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_wrong_field_type_returns_validation_error() {
        let response = post_json("/calculate", r#"{"years": [3]}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_reason_returns_400() {
        let response = post_json("/calculate", r#"{"salary": 1, "reason": "mutasi"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "UNKNOWN_TERMINATION_REASON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_summary_returns_plain_text() {
        let response = post_json(
            "/calculate/summary",
            r#"{"years": 3, "months": 0, "salary": 5000000}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let text = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
        assert!(text.contains("Total Perkiraan: Rp\u{a0}34.500.000"));
    }

    #[tokio::test]
    async fn test_termination_reasons_in_display_order() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .uri("/termination-reasons")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let options: Vec<TerminationReasonOption> =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].value, "efisiensi");
        assert_eq!(options[6].value, "lainnya");
    }

    #[tokio::test]
    async fn test_health() {
        let response = create_router(create_test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_build_response_uses_configured_contact() {
        let state = create_test_state();
        let tenure = TenureDuration::new(1, 0);
        let input = CompensationInput::new(tenure, 1_000_000, TerminationReason::Other);

        let response = build_response(tenure, input, state.config());

        let expected_prefix = format!(
            "{}/{}?text=",
            state.config().contact().link_base,
            state.config().contact().whatsapp_number
        );
        assert!(response.consultation.link.starts_with(&expected_prefix));
        assert!(response.consultation.message.contains("Alasan PHK: Lainnya"));
        assert_eq!(response.regulation, *state.config().regulation());
    }
}
