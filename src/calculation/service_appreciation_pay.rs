//! Service appreciation pay (uang penghargaan masa kerja, UPMK) calculation.
//!
//! Employees with at least three years of service receive a number of months
//! of salary chosen by three-year tenure block. Shorter tenures receive
//! nothing.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::multiplier_table::SERVICE_APPRECIATION_TABLE;

/// Regulation clause defining the service appreciation pay table.
pub const SERVICE_APPRECIATION_PAY_CLAUSE: &str = "PP 35/2021 Pasal 40 ayat (3)";

/// The result of calculating service appreciation pay, including the audit step.
#[derive(Debug, Clone)]
pub struct ServiceAppreciationPayResult {
    /// The service appreciation pay in whole Rupiah.
    pub amount: Decimal,
    /// Months of salary applied; 0 when the tenure is too short.
    pub multiplier: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the service appreciation pay for a salary and tenure.
///
/// # Examples
///
/// ```
/// use pesangon_engine::calculation::service_appreciation_pay;
/// use rust_decimal::Decimal;
///
/// assert_eq!(service_appreciation_pay(5_000_000, 35), Decimal::ZERO);
/// assert_eq!(service_appreciation_pay(5_000_000, 36), Decimal::from(10_000_000));
/// ```
pub fn service_appreciation_pay(base_salary: u64, total_months: u64) -> Decimal {
    Decimal::from(base_salary)
        * Decimal::from(SERVICE_APPRECIATION_TABLE.multiplier(total_months))
}

/// Calculates service appreciation pay and records the eligibility decision.
///
/// # Arguments
///
/// * `base_salary` - Monthly base salary in whole Rupiah
/// * `total_months` - Total tenure in months
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_service_appreciation_pay(
    base_salary: u64,
    total_months: u64,
    step_number: u32,
) -> ServiceAppreciationPayResult {
    let band = SERVICE_APPRECIATION_TABLE.band(total_months);
    let amount = service_appreciation_pay(base_salary, total_months);
    let eligible = band.multiplier > 0;

    let reasoning = if eligible {
        format!(
            "Tenure of {} months falls in band {}: {} x {} = {}",
            total_months, band, base_salary, band.multiplier, amount
        )
    } else {
        format!(
            "Not eligible - tenure of {} months is below the {} month minimum",
            total_months,
            band.upper_months.unwrap_or_default()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_appreciation_pay".to_string(),
        rule_name: "Uang Penghargaan Masa Kerja (UPMK)".to_string(),
        clause_ref: SERVICE_APPRECIATION_PAY_CLAUSE.to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "total_months": total_months
        }),
        output: serde_json::json!({
            "eligible": eligible,
            "multiplier": band.multiplier,
            "band": band,
            "amount": amount.to_string()
        }),
        reasoning,
    };

    ServiceAppreciationPayResult {
        amount,
        multiplier: band.multiplier,
        audit_step,
    }
}
