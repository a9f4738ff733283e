//! Rupiah formatting.
//!
//! Amounts are shown the way Indonesian locale formatting shows them: `.` as
//! the thousands separator, no fraction digits, and a `Rp` prefix separated
//! by a non-breaking space.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix, including the non-breaking space.
pub const RUPIAH_PREFIX: &str = "Rp\u{a0}";

/// Groups an integer with `.` every three digits.
///
/// # Examples
///
/// ```
/// use pesangon_engine::presentation::format_grouped;
///
/// assert_eq!(format_grouped(5_000_000), "5.000.000");
/// assert_eq!(format_grouped(999), "999");
/// ```
pub fn format_grouped(amount: u64) -> String {
    group_digits(&amount.to_string())
}

/// Formats an amount as Rupiah with no fraction digits.
///
/// Fractions are rounded half away from zero.
///
/// # Examples
///
/// ```
/// use pesangon_engine::presentation::format_rupiah;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_rupiah(Decimal::from(34_500_000)), "Rp\u{a0}34.500.000");
/// assert_eq!(format_rupiah(Decimal::ZERO), "Rp\u{a0}0");
/// ```
pub fn format_rupiah(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().trunc().to_string();
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", sign, RUPIAH_PREFIX, group_digits(&digits))
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_group_boundaries() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(100), "100");
        assert_eq!(format_grouped(1_000), "1.000");
        assert_eq!(format_grouped(12_345), "12.345");
        assert_eq!(format_grouped(123_456), "123.456");
        assert_eq!(format_grouped(1_234_567), "1.234.567");
    }

    #[test]
    fn test_group_max_value() {
        assert_eq!(format_grouped(u64::MAX), "18.446.744.073.709.551.615");
    }

    #[test]
    fn test_rupiah_uses_non_breaking_space() {
        assert_eq!(format_rupiah(Decimal::from(5_000_000)), "Rp\u{a0}5.000.000");
    }

    #[test]
    fn test_rupiah_drops_fraction_digits() {
        assert_eq!(format_rupiah(dec("4500000.00")), "Rp\u{a0}4.500.000");
    }

    #[test]
    fn test_rupiah_rounds_half_away_from_zero() {
        assert_eq!(format_rupiah(dec("1.5")), "Rp\u{a0}2");
        assert_eq!(format_rupiah(dec("1.49")), "Rp\u{a0}1");
        assert_eq!(format_rupiah(dec("999.5")), "Rp\u{a0}1.000");
    }

    #[test]
    fn test_rupiah_negative_amount() {
        assert_eq!(format_rupiah(dec("-2500")), "-Rp\u{a0}2.500");
        assert_eq!(format_rupiah(dec("-0.2")), "Rp\u{a0}0");
    }
}
