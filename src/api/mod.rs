//! HTTP API module for the severance calculator.
//!
//! This module provides the REST endpoints that normalize a calculator form,
//! compute the compensation and present the result.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculatorRequest, FormField};
pub use response::{
    ApiError, ApiErrorResponse, CalculatorResponse, Consultation, HealthResponse,
    TerminationReasonOption,
};
pub use state::AppState;
