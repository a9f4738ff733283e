//! Full severance compensation calculation.
//!
//! Combines severance pay, service appreciation pay and rights replacement
//! pay into a single [`CompensationResult`].

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CompensationInput, CompensationResult, TerminationReason,
};

use super::multiplier_table::{SERVICE_APPRECIATION_TABLE, SEVERANCE_TABLE};
use super::rights_replacement_pay::{calculate_rights_replacement_pay, rights_replacement_pay};
use super::service_appreciation_pay::{
    calculate_service_appreciation_pay, service_appreciation_pay,
};
use super::severance_pay::{calculate_severance_pay, severance_pay};

/// A compensation result together with the audit record of how it was derived.
#[derive(Debug, Clone)]
pub struct CompensationCalculation {
    /// The computed payments.
    pub result: CompensationResult,
    /// One audit step per component, in calculation order.
    pub steps: Vec<AuditStep>,
    /// Warnings about the estimate.
    pub warnings: Vec<AuditWarning>,
}

impl CompensationCalculation {
    /// Converts the audit record into an [`AuditTrace`] with the given duration.
    pub fn audit_trace(&self, duration_us: u64) -> AuditTrace {
        AuditTrace {
            steps: self.steps.clone(),
            warnings: self.warnings.clone(),
            duration_us,
        }
    }
}

/// Computes the statutory severance compensation for an input.
///
/// This is a pure function: it never fails and returns equal results for
/// equal inputs. A zero salary yields zero payments; a zero tenure still
/// takes the one-month severance multiplier.
///
/// # Example
///
/// ```
/// use pesangon_engine::calculation::compute_compensation;
/// use pesangon_engine::models::{CompensationInput, TenureDuration, TerminationReason};
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::new(
///     TenureDuration::new(3, 0),
///     5_000_000,
///     TerminationReason::Efficiency,
/// );
/// let result = compute_compensation(&input);
///
/// assert_eq!(result.severance_pay, Decimal::from(20_000_000));
/// assert_eq!(result.service_appreciation_pay, Decimal::from(10_000_000));
/// assert_eq!(result.rights_replacement_pay, Decimal::from(4_500_000));
/// assert_eq!(result.total, Decimal::from(34_500_000));
/// ```
pub fn compute_compensation(input: &CompensationInput) -> CompensationResult {
    let up = severance_pay(input.base_salary, input.total_months);
    let upmk = service_appreciation_pay(input.base_salary, input.total_months);
    let uph = rights_replacement_pay(up, upmk);

    CompensationResult {
        severance_pay: up,
        service_appreciation_pay: upmk,
        rights_replacement_pay: uph,
        total: up + upmk + uph,
        severance_multiplier: SEVERANCE_TABLE.multiplier(input.total_months),
        service_appreciation_multiplier: SERVICE_APPRECIATION_TABLE.multiplier(input.total_months),
    }
}

/// Computes the compensation and keeps an audit step for every component.
///
/// The `result` is identical to what [`compute_compensation`] returns for the
/// same input.
pub fn calculate_compensation(input: &CompensationInput) -> CompensationCalculation {
    let mut step_number = 1;

    let severance = calculate_severance_pay(input.base_salary, input.total_months, step_number);
    step_number += 1;

    let appreciation =
        calculate_service_appreciation_pay(input.base_salary, input.total_months, step_number);
    step_number += 1;

    let rights =
        calculate_rights_replacement_pay(severance.amount, appreciation.amount, step_number);

    let result = CompensationResult {
        severance_pay: severance.amount,
        service_appreciation_pay: appreciation.amount,
        rights_replacement_pay: rights.amount,
        total: severance.amount + appreciation.amount + rights.amount,
        severance_multiplier: severance.multiplier,
        service_appreciation_multiplier: appreciation.multiplier,
    };

    CompensationCalculation {
        result,
        steps: vec![severance.audit_step, appreciation.audit_step, rights.audit_step],
        warnings: collect_warnings(input),
    }
}

fn collect_warnings(input: &CompensationInput) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if input.base_salary == 0 {
        warnings.push(AuditWarning {
            code: "ZERO_BASE_SALARY".to_string(),
            message: "Base salary is zero; every payment is zero".to_string(),
            severity: "low".to_string(),
        });
    }

    // The tables apply uniformly; entitlements that differ by reason are not modelled.
    if input.termination_reason != TerminationReason::Efficiency {
        warnings.push(AuditWarning {
            code: "TERMINATION_REASON_NOT_APPLIED".to_string(),
            message: format!(
                "Termination reason '{}' may change statutory entitlements; the estimate uses the standard tables",
                input.termination_reason.label()
            ),
            severity: "medium".to_string(),
        });
    }

    warnings
}
