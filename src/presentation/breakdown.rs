//! Result breakdown lines.
//!
//! Turns a [`CompensationResult`] into the labelled lines shown under
//! "Ringkasan Hasil".

use serde::{Deserialize, Serialize};

use crate::models::CompensationResult;

use super::currency::format_rupiah;

/// Label of the severance pay line.
pub const SEVERANCE_PAY_LABEL: &str = "Uang Pesangon (UP)";
/// Label of the service appreciation pay line.
pub const SERVICE_APPRECIATION_PAY_LABEL: &str = "Uang Penghargaan Masa Kerja (UPMK)";
/// Label of the rights replacement pay line.
pub const RIGHTS_REPLACEMENT_PAY_LABEL: &str = "Uang Penggantian Hak (UPH) 15%";
/// Label of the total line.
pub const TOTAL_LABEL: &str = "Total Perkiraan";

/// Shown in place of an amount the employee is not entitled to.
pub const NOT_APPLICABLE: &str = "—";

/// One labelled line of the result breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// What the line is.
    pub label: String,
    /// The formatted value.
    pub value: String,
}

impl BreakdownLine {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Builds the four breakdown lines for a result: UP, UPMK, UPH and total.
///
/// Multiplied components read `"{k} × gaji = Rp …"`. Service appreciation
/// pay reads `"—"` when the tenure is too short to qualify.
///
/// # Example
///
/// ```
/// use pesangon_engine::calculation::compute_compensation;
/// use pesangon_engine::models::{CompensationInput, TenureDuration, TerminationReason};
/// use pesangon_engine::presentation::breakdown_lines;
///
/// let input = CompensationInput::new(TenureDuration::new(1, 0), 4_000_000, TerminationReason::Other);
/// let lines = breakdown_lines(&compute_compensation(&input));
///
/// assert_eq!(lines[0].value, "2 × gaji = Rp\u{a0}8.000.000");
/// assert_eq!(lines[1].value, "—");
/// ```
pub fn breakdown_lines(result: &CompensationResult) -> Vec<BreakdownLine> {
    let service_appreciation = if result.has_service_appreciation() {
        multiplied(
            result.service_appreciation_multiplier,
            &format_rupiah(result.service_appreciation_pay),
        )
    } else {
        NOT_APPLICABLE.to_string()
    };

    vec![
        BreakdownLine::new(
            SEVERANCE_PAY_LABEL,
            multiplied(result.severance_multiplier, &format_rupiah(result.severance_pay)),
        ),
        BreakdownLine::new(SERVICE_APPRECIATION_PAY_LABEL, service_appreciation),
        BreakdownLine::new(
            RIGHTS_REPLACEMENT_PAY_LABEL,
            format_rupiah(result.rights_replacement_pay),
        ),
        BreakdownLine::new(TOTAL_LABEL, format_rupiah(result.total)),
    ]
}

fn multiplied(multiplier: u32, amount: &str) -> String {
    format!("{} × gaji = {}", multiplier, amount)
}
