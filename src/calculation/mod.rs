//! Calculation logic for the severance calculator.
//!
//! This module contains the multiplier tables and the calculation functions
//! for severance pay (UP), service appreciation pay (UPMK), rights
//! replacement pay (UPH) and the combined compensation result. Each
//! component has a plain function returning the amount and an audited
//! variant returning the amount with an [`AuditStep`](crate::models::AuditStep).

mod compensation;
mod multiplier_table;
mod rights_replacement_pay;
mod service_appreciation_pay;
mod severance_pay;

pub use compensation::{CompensationCalculation, calculate_compensation, compute_compensation};
pub use multiplier_table::{
    MultiplierBand, MultiplierTable, SERVICE_APPRECIATION_TABLE, SEVERANCE_TABLE,
    service_appreciation_multiplier, severance_multiplier,
};
pub use rights_replacement_pay::{
    RIGHTS_REPLACEMENT_PAY_CLAUSE, RIGHTS_REPLACEMENT_RATE, RightsReplacementPayResult,
    calculate_rights_replacement_pay, rights_replacement_pay,
};
pub use service_appreciation_pay::{
    SERVICE_APPRECIATION_PAY_CLAUSE, ServiceAppreciationPayResult,
    calculate_service_appreciation_pay, service_appreciation_pay,
};
pub use severance_pay::{
    SEVERANCE_PAY_CLAUSE, SeverancePayResult, calculate_severance_pay, severance_pay,
};
