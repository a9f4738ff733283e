//! Compensation input model and termination reasons.
//!
//! This module defines [`CompensationInput`], the canonical input to the
//! calculator, and [`TerminationReason`], the catalogue of reasons for
//! termination (alasan PHK) offered to the user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::TenureDuration;

/// The reason an employment relationship was terminated.
///
/// The reason is carried through to the consultation message and printable
/// summary. It does not change the arithmetic.
///
/// # Example
///
/// ```
/// use pesangon_engine::models::TerminationReason;
///
/// let reason: TerminationReason = "pensiun".parse().unwrap();
/// assert_eq!(reason, TerminationReason::Retirement);
/// assert_eq!(reason.label(), "Pensiun");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Company efficiency measures (efisiensi).
    #[default]
    #[serde(rename = "efisiensi")]
    Efficiency,
    /// Misconduct or disciplinary breach (pelanggaran).
    #[serde(rename = "pelanggaran")]
    Misconduct,
    /// Retirement (pensiun).
    #[serde(rename = "pensiun")]
    Retirement,
    /// Death of the employee (meninggal).
    #[serde(rename = "meninggal")]
    Death,
    /// Prolonged illness (sakit berkepanjangan).
    #[serde(rename = "sakit_berkepanjangan")]
    ProlongedIllness,
    /// Force majeure.
    #[serde(rename = "force_majeure")]
    ForceMajeure,
    /// Any other reason (lainnya).
    #[serde(rename = "lainnya")]
    Other,
}

impl TerminationReason {
    /// Every reason, in the order it is offered to the user.
    pub const ALL: [TerminationReason; 7] = [
        TerminationReason::Efficiency,
        TerminationReason::Misconduct,
        TerminationReason::Retirement,
        TerminationReason::Death,
        TerminationReason::ProlongedIllness,
        TerminationReason::ForceMajeure,
        TerminationReason::Other,
    ];

    /// Returns the wire value used in requests and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::Efficiency => "efisiensi",
            TerminationReason::Misconduct => "pelanggaran",
            TerminationReason::Retirement => "pensiun",
            TerminationReason::Death => "meninggal",
            TerminationReason::ProlongedIllness => "sakit_berkepanjangan",
            TerminationReason::ForceMajeure => "force_majeure",
            TerminationReason::Other => "lainnya",
        }
    }

    /// Returns the Indonesian display label.
    pub fn label(&self) -> &'static str {
        match self {
            TerminationReason::Efficiency => "Efisiensi Perusahaan",
            TerminationReason::Misconduct => "Pelanggaran / Indisipliner",
            TerminationReason::Retirement => "Pensiun",
            TerminationReason::Death => "Meninggal Dunia",
            TerminationReason::ProlongedIllness => "Sakit Berkepanjangan",
            TerminationReason::ForceMajeure => "Force Majeure",
            TerminationReason::Other => "Lainnya",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerminationReason {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        TerminationReason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == value)
            .ok_or_else(|| EngineError::UnknownTerminationReason {
                value: s.to_string(),
            })
    }
}

/// Canonical input to the severance calculator.
///
/// All fields are already normalized: tenure is expressed in whole months and
/// the base salary in whole Rupiah.
///
/// # Example
///
/// ```
/// use pesangon_engine::models::{CompensationInput, TenureDuration, TerminationReason};
///
/// let input = CompensationInput::new(
///     TenureDuration::new(3, 0),
///     5_000_000,
///     TerminationReason::Efficiency,
/// );
/// assert_eq!(input.total_months, 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Total tenure in months.
    pub total_months: u64,
    /// Monthly base salary (gaji pokok) in whole Rupiah.
    pub base_salary: u64,
    /// The reason for termination.
    pub termination_reason: TerminationReason,
}

impl CompensationInput {
    /// Builds an input from a tenure, a base salary and a termination reason.
    pub fn new(
        tenure: TenureDuration,
        base_salary: u64,
        termination_reason: TerminationReason,
    ) -> Self {
        Self {
            total_months: tenure.total_months(),
            base_salary,
            termination_reason,
        }
    }
}
