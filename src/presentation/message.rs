//! Consultation message and messaging link.
//!
//! After seeing an estimate, a user can send it to a consultant. This module
//! builds the prefilled message text and the link that opens a chat with it.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::ContactConfig;
use crate::models::{CompensationInput, CompensationResult, TenureDuration};

use super::currency::{format_grouped, format_rupiah};

/// Characters left unescaped in the `text` query parameter: alphanumerics
/// plus `- _ . ! ~ * ' ( )`.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the prefilled consultation message for a result.
///
/// # Example
///
/// ```
/// use pesangon_engine::calculation::compute_compensation;
/// use pesangon_engine::models::{CompensationInput, TenureDuration, TerminationReason};
/// use pesangon_engine::presentation::consultation_message;
///
/// let tenure = TenureDuration::new(3, 0);
/// let input = CompensationInput::new(tenure, 5_000_000, TerminationReason::Efficiency);
/// let message = consultation_message(&tenure, &input, &compute_compensation(&input));
///
/// assert!(message.contains("• Masa kerja: 3 tahun 0 bulan"));
/// assert!(message.contains("• Perkiraan total: Rp\u{a0}34.500.000"));
/// ```
pub fn consultation_message(
    tenure: &TenureDuration,
    input: &CompensationInput,
    result: &CompensationResult,
) -> String {
    format!(
        "Halo, saya ingin konsultasi hasil kalkulator pesangon:\n\
         • Masa kerja: {} tahun {} bulan\n\
         • Gaji pokok: Rp {}\n\
         • Alasan PHK: {}\n\
         • Perkiraan total: {}",
        tenure.years(),
        tenure.months(),
        format_grouped(input.base_salary),
        input.termination_reason.label(),
        format_rupiah(result.total)
    )
}

/// Builds the chat link carrying `message` for the configured contact.
///
/// # Example
///
/// ```
/// use pesangon_engine::config::ContactConfig;
/// use pesangon_engine::presentation::consultation_link;
///
/// let contact = ContactConfig {
///     whatsapp_number: "6281234567890".to_string(),
///     link_base: "https://wa.me".to_string(),
/// };
/// assert_eq!(
///     consultation_link(&contact, "Halo, Rp 1"),
///     "https://wa.me/6281234567890?text=Halo%2C%20Rp%201"
/// );
/// ```
pub fn consultation_link(contact: &ContactConfig, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        contact.link_base.trim_end_matches('/'),
        contact.whatsapp_number,
        utf8_percent_encode(message, MESSAGE_ENCODE_SET)
    )
}
