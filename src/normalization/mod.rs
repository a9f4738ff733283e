//! Input normalization for the severance calculator.
//!
//! Turns free-form user input into the canonical numeric values the
//! calculator consumes. Nothing in this module fails: malformed input is
//! coerced to the nearest valid value.
//!
//! # Example
//!
//! ```
//! use pesangon_engine::normalization::{normalize_tenure, parse_monetary_amount};
//!
//! let tenure = normalize_tenure("3", "0");
//! let salary = parse_monetary_amount("5.000.000");
//! assert_eq!(tenure.total_months(), 36);
//! assert_eq!(salary, 5_000_000);
//! ```

mod monetary;
mod tenure;

pub use monetary::parse_monetary_amount;
pub use tenure::{clamp_tenure_months, clamp_tenure_years, normalize_tenure, parse_integer_field};
