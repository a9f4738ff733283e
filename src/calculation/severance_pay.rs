//! Severance pay (uang pesangon, UP) calculation.
//!
//! Severance pay is the base salary multiplied by a tenure-banded number of
//! months, from one month for less than a year of service up to nine months
//! for eight years or more.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::multiplier_table::SEVERANCE_TABLE;

/// Regulation clause defining the severance pay table.
pub const SEVERANCE_PAY_CLAUSE: &str = "PP 35/2021 Pasal 40 ayat (2)";

/// The result of calculating severance pay, including the audit step.
#[derive(Debug, Clone)]
pub struct SeverancePayResult {
    /// The severance pay in whole Rupiah.
    pub amount: Decimal,
    /// Months of salary applied.
    pub multiplier: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the severance pay for a salary and tenure.
///
/// # Examples
///
/// ```
/// use pesangon_engine::calculation::severance_pay;
/// use rust_decimal::Decimal;
///
/// assert_eq!(severance_pay(5_000_000, 36), Decimal::from(20_000_000));
/// ```
pub fn severance_pay(base_salary: u64, total_months: u64) -> Decimal {
    Decimal::from(base_salary) * Decimal::from(SEVERANCE_TABLE.multiplier(total_months))
}

/// Calculates severance pay and records how the multiplier was chosen.
///
/// # Arguments
///
/// * `base_salary` - Monthly base salary in whole Rupiah
/// * `total_months` - Total tenure in months
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_severance_pay(
    base_salary: u64,
    total_months: u64,
    step_number: u32,
) -> SeverancePayResult {
    let band = SEVERANCE_TABLE.band(total_months);
    let amount = severance_pay(base_salary, total_months);

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_pay".to_string(),
        rule_name: "Uang Pesangon (UP)".to_string(),
        clause_ref: SEVERANCE_PAY_CLAUSE.to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "total_months": total_months
        }),
        output: serde_json::json!({
            "multiplier": band.multiplier,
            "band": band,
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "Tenure of {} months falls in band {}: {} x {} = {}",
            total_months, band, base_salary, band.multiplier, amount
        ),
    };

    SeverancePayResult {
        amount,
        multiplier: band.multiplier,
        audit_step,
    }
}
