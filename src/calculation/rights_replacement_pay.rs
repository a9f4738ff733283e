//! Rights replacement pay (uang penggantian hak, UPH) calculation.
//!
//! Rights replacement pay covers untaken leave, housing and medical
//! entitlements as a flat 15% of severance plus service appreciation pay.
//! This is the only step that can produce a fraction of a Rupiah, so it is
//! the only step that rounds.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AuditStep;

/// Regulation clause defining rights replacement pay.
pub const RIGHTS_REPLACEMENT_PAY_CLAUSE: &str = "PP 35/2021 Pasal 40 ayat (4)";

/// The rights replacement rate: 15%.
pub const RIGHTS_REPLACEMENT_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// The result of calculating rights replacement pay, including the audit step.
#[derive(Debug, Clone)]
pub struct RightsReplacementPayResult {
    /// The rights replacement pay in whole Rupiah.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns 15% of severance plus service appreciation pay, rounded half-up
/// to the whole Rupiah.
///
/// # Examples
///
/// ```
/// use pesangon_engine::calculation::rights_replacement_pay;
/// use rust_decimal::Decimal;
///
/// let uph = rights_replacement_pay(Decimal::from(20_000_000), Decimal::from(10_000_000));
/// assert_eq!(uph, Decimal::from(4_500_000));
///
/// // 15% of 10 is 1.5, which rounds up.
/// assert_eq!(rights_replacement_pay(Decimal::from(10), Decimal::ZERO), Decimal::from(2));
/// ```
pub fn rights_replacement_pay(
    severance_pay: Decimal,
    service_appreciation_pay: Decimal,
) -> Decimal {
    round_to_rupiah((severance_pay + service_appreciation_pay) * RIGHTS_REPLACEMENT_RATE)
}

/// Rounds an amount to whole Rupiah, with midpoints going up.
fn round_to_rupiah(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates rights replacement pay and records the rounding applied.
///
/// # Arguments
///
/// * `severance_pay` - Severance pay (UP) in whole Rupiah
/// * `service_appreciation_pay` - Service appreciation pay (UPMK) in whole Rupiah
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_rights_replacement_pay(
    severance_pay: Decimal,
    service_appreciation_pay: Decimal,
    step_number: u32,
) -> RightsReplacementPayResult {
    let basis = severance_pay + service_appreciation_pay;
    let unrounded = basis * RIGHTS_REPLACEMENT_RATE;
    let amount = round_to_rupiah(unrounded);

    let audit_step = AuditStep {
        step_number,
        rule_id: "rights_replacement_pay".to_string(),
        rule_name: "Uang Penggantian Hak (UPH)".to_string(),
        clause_ref: RIGHTS_REPLACEMENT_PAY_CLAUSE.to_string(),
        input: serde_json::json!({
            "severance_pay": severance_pay.to_string(),
            "service_appreciation_pay": service_appreciation_pay.to_string(),
            "rate": RIGHTS_REPLACEMENT_RATE.to_string()
        }),
        output: serde_json::json!({
            "unrounded": unrounded.normalize().to_string(),
            "amount": amount.to_string(),
            "rounding": "half_up"
        }),
        reasoning: format!(
            "({} + {}) x {} = {}, rounded half-up to {}",
            severance_pay,
            service_appreciation_pay,
            RIGHTS_REPLACEMENT_RATE,
            unrounded.normalize(),
            amount
        ),
    };

    RightsReplacementPayResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_is_exactly_fifteen_percent() {
        assert_eq!(RIGHTS_REPLACEMENT_RATE, Decimal::new(15, 2));
    }

    #[test]
    fn test_fifteen_percent_of_combined_pay() {
        let result = calculate_rights_replacement_pay(
            Decimal::from(20_000_000),
            Decimal::from(10_000_000),
            3,
        );

        assert_eq!(result.amount, Decimal::from(4_500_000));
        assert_eq!(result.audit_step.rule_id, "rights_replacement_pay");
        assert_eq!(result.audit_step.clause_ref, RIGHTS_REPLACEMENT_PAY_CLAUSE);
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(
            result.audit_step.output["amount"].as_str().unwrap(),
            "4500000"
        );
    }

    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(
            rights_replacement_pay(Decimal::from(10), Decimal::ZERO),
            Decimal::from(2)
        );
        assert_eq!(
            rights_replacement_pay(Decimal::from(30), Decimal::ZERO),
            Decimal::from(5)
        );
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        // 15% of 3 is 0.45.
        assert_eq!(
            rights_replacement_pay(Decimal::from(3), Decimal::ZERO),
            Decimal::ZERO
        );
        // 15% of 1 is 0.15.
        assert_eq!(
            rights_replacement_pay(Decimal::ONE, Decimal::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_above_midpoint_rounds_up() {
        // 15% of 7 is 1.05, of 4 is 0.6.
        assert_eq!(
            rights_replacement_pay(Decimal::from(7), Decimal::ZERO),
            Decimal::ONE
        );
        assert_eq!(
            rights_replacement_pay(Decimal::from(4), Decimal::ZERO),
            Decimal::ONE
        );
    }

    #[test]
    fn test_rounded_amount_has_no_fraction_digits() {
        let amount = rights_replacement_pay(Decimal::from(30_000_000), Decimal::ZERO);
        assert_eq!(amount.to_string(), "4500000");
    }

    #[test]
    fn test_audit_records_unrounded_value() {
        let result = calculate_rights_replacement_pay(Decimal::from(10), Decimal::ZERO, 1);

        assert_eq!(
            result.audit_step.output["unrounded"].as_str().unwrap(),
            "1.5"
        );
        assert_eq!(result.audit_step.output["amount"].as_str().unwrap(), "2");
        assert!(result.audit_step.reasoning.contains("rounded half-up to 2"));
    }

    #[test]
    fn test_zero_basis_is_zero() {
        assert_eq!(
            rights_replacement_pay(Decimal::ZERO, Decimal::ZERO),
            Decimal::ZERO
        );
    }
}
