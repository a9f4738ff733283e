//! Compensation result models.
//!
//! This module contains the [`CompensationResult`] type produced by the
//! calculator, along with the audit structures that record how each
//! component was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The statutory payments owed on termination.
///
/// Every amount is in whole Rupiah. The result is a plain value: computing
/// it twice from the same input yields equal values.
///
/// # Example
///
/// ```
/// use pesangon_engine::models::CompensationResult;
/// use rust_decimal::Decimal;
///
/// let result = CompensationResult {
///     severance_pay: Decimal::from(20_000_000),
///     service_appreciation_pay: Decimal::from(10_000_000),
///     rights_replacement_pay: Decimal::from(4_500_000),
///     total: Decimal::from(34_500_000),
///     severance_multiplier: 4,
///     service_appreciation_multiplier: 2,
/// };
/// assert!(result.is_consistent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompensationResult {
    /// Severance pay (uang pesangon, UP).
    pub severance_pay: Decimal,
    /// Service appreciation pay (uang penghargaan masa kerja, UPMK).
    pub service_appreciation_pay: Decimal,
    /// Rights replacement pay (uang penggantian hak, UPH).
    pub rights_replacement_pay: Decimal,
    /// The sum of the three components.
    pub total: Decimal,
    /// Months of salary paid as severance.
    pub severance_multiplier: u32,
    /// Months of salary paid as service appreciation; 0 when not eligible.
    pub service_appreciation_multiplier: u32,
}

impl CompensationResult {
    /// Returns true when `total` equals the sum of the three components.
    pub fn is_consistent(&self) -> bool {
        self.total
            == self.severance_pay + self.service_appreciation_pay + self.rights_replacement_pay
    }

    /// Returns true when the employee is entitled to service appreciation pay.
    pub fn has_service_appreciation(&self) -> bool {
        self.service_appreciation_multiplier > 0
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the regulation clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never block a result; they flag cases where the estimate may
/// differ from what an adviser would conclude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use pesangon_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Ordered steps, one per rule applied.
    pub steps: Vec<AuditStep>,
    /// Warnings raised while calculating.
    pub warnings: Vec<AuditWarning>,
    /// Wall time spent calculating, in microseconds.
    pub duration_us: u64,
}
