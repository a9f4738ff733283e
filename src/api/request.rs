//! Request types for the severance calculator API.
//!
//! Requests carry the calculator form as the user filled it in. Numeric
//! fields may arrive as JSON numbers or as text; both are normalized the
//! same way the form itself normalizes them.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{CompensationInput, TenureDuration, TerminationReason};
use crate::normalization::{
    clamp_tenure_months, clamp_tenure_years, parse_integer_field, parse_monetary_amount,
};

/// A raw form field: either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormField {
    /// A JSON number, integral or not.
    Number(serde_json::Number),
    /// Text as typed into the form.
    Text(String),
}

impl FormField {
    /// Reads the field as an integer.
    ///
    /// Numbers are truncated toward zero and saturate at the `i64` range.
    /// Text is read by its leading integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FormField::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            }),
            FormField::Text(s) => parse_integer_field(s),
        }
    }

    /// Reads the field as a whole Rupiah amount.
    ///
    /// Numbers are truncated toward zero, negative numbers read as 0. Text
    /// keeps its digits only.
    pub fn as_amount(&self) -> u64 {
        match self {
            FormField::Number(n) => n.as_u64().unwrap_or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .map(|f| f.trunc() as u64)
                    .unwrap_or(0)
            }),
            FormField::Text(s) => parse_monetary_amount(s),
        }
    }
}

/// Request body for the `/calculate` and `/calculate/summary` endpoints.
///
/// Every field is optional. Missing numeric fields read as 0 and a missing
/// reason reads as [`TerminationReason::Efficiency`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorRequest {
    /// Whole years of service (masa kerja, tahun).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<FormField>,
    /// Months of service beyond whole years (masa kerja, bulan).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<FormField>,
    /// Monthly base salary (gaji pokok).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<FormField>,
    /// Termination reason wire value (alasan PHK).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CalculatorRequest {
    /// Normalizes the form into a tenure and a calculator input.
    ///
    /// Only an unrecognised termination reason is an error; every numeric
    /// field is coerced.
    pub fn normalize(&self) -> EngineResult<(TenureDuration, CompensationInput)> {
        let tenure = TenureDuration::new(
            clamp_tenure_years(self.years.as_ref().and_then(FormField::as_integer)),
            clamp_tenure_months(self.months.as_ref().and_then(FormField::as_integer)),
        );
        let base_salary = self.salary.as_ref().map_or(0, FormField::as_amount);
        let reason = match self.reason.as_deref() {
            Some(value) => value.parse::<TerminationReason>()?,
            None => TerminationReason::default(),
        };

        Ok((tenure, CompensationInput::new(tenure, base_salary, reason)))
    }
}
