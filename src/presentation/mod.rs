//! Presentation of calculation results.
//!
//! This module formats a computed result for people: Rupiah amounts,
//! breakdown lines, the prefilled consultation message with its chat link,
//! and the printable summary. Nothing here changes the numbers.

mod breakdown;
mod currency;
mod message;
mod summary;

pub use breakdown::{
    BreakdownLine, NOT_APPLICABLE, RIGHTS_REPLACEMENT_PAY_LABEL, SERVICE_APPRECIATION_PAY_LABEL,
    SEVERANCE_PAY_LABEL, TOTAL_LABEL, breakdown_lines,
};
pub use currency::{RUPIAH_PREFIX, format_grouped, format_rupiah};
pub use message::{consultation_link, consultation_message};
pub use summary::{EMPTY_SALARY_PROMPT, SUMMARY_TITLE, render_summary};
