//! Core data models for the severance calculator.
//!
//! This module contains the value types that flow between the normalizer,
//! the calculation engine and the presentation layer.

mod compensation_input;
mod compensation_result;
mod tenure;

pub use compensation_input::{CompensationInput, TerminationReason};
pub use compensation_result::{AuditStep, AuditTrace, AuditWarning, CompensationResult};
pub use tenure::{MAX_TENURE_MONTHS, TenureDuration};
