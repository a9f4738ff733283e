//! Printable result summary.
//!
//! The print/export action renders the current estimate as plain text. It
//! reads an already computed result and never recalculates.

use std::fmt::Write as _;

use crate::config::RegulationMetadata;
use crate::models::{CompensationInput, CompensationResult, TenureDuration};

use super::breakdown::breakdown_lines;
use super::currency::format_grouped;

/// Title printed at the top of every summary.
pub const SUMMARY_TITLE: &str = "Kalkulator Pesangon Smart - Ringkasan Hasil";

/// Shown in place of the breakdown while no salary has been entered.
pub const EMPTY_SALARY_PROMPT: &str = "Isi gaji pokok dan masa kerja untuk melihat perhitungan.";

/// Renders the printable summary of an estimate.
///
/// The summary lists the inputs, the breakdown lines and the regulation
/// disclaimer. With a zero base salary the breakdown is replaced by a prompt
/// to fill in the form.
///
/// # Example
///
/// ```
/// use pesangon_engine::calculation::compute_compensation;
/// use pesangon_engine::config::RegulationMetadata;
/// use pesangon_engine::models::{CompensationInput, TenureDuration, TerminationReason};
/// use pesangon_engine::presentation::render_summary;
///
/// let regulation = RegulationMetadata {
///     code: "PP 35/2021".to_string(),
///     name: "PP 35/2021".to_string(),
///     version: "2021".to_string(),
///     source_url: "https://example.com".to_string(),
///     disclaimer: "Hasil bersifat perkiraan.".to_string(),
/// };
/// let tenure = TenureDuration::new(3, 0);
/// let input = CompensationInput::new(tenure, 5_000_000, TerminationReason::Efficiency);
/// let summary = render_summary(&tenure, &input, &compute_compensation(&input), &regulation);
///
/// assert!(summary.contains("Total Perkiraan: Rp\u{a0}34.500.000"));
/// ```
pub fn render_summary(
    tenure: &TenureDuration,
    input: &CompensationInput,
    result: &CompensationResult,
    regulation: &RegulationMetadata,
) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", SUMMARY_TITLE);
    let _ = writeln!(out, "{}", "=".repeat(SUMMARY_TITLE.chars().count()));
    let _ = writeln!(
        out,
        "Masa kerja: {} tahun {} bulan",
        tenure.years(),
        tenure.months()
    );
    let _ = writeln!(out, "Gaji pokok: Rp {}", format_grouped(input.base_salary));
    let _ = writeln!(out, "Alasan PHK: {}", input.termination_reason.label());
    out.push('\n');

    if input.base_salary == 0 {
        let _ = writeln!(out, "{}", EMPTY_SALARY_PROMPT);
    } else {
        for line in breakdown_lines(result) {
            let _ = writeln!(out, "{}: {}", line.label, line.value);
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{}", regulation.disclaimer);
    let _ = writeln!(out, "Dasar hukum: {} ({})", regulation.name, regulation.source_url);

    out
}
