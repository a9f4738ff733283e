//! Monetary input normalization.
//!
//! Users type salaries with thousands separators, currency prefixes and
//! stray spaces ("Rp 5.000.000"). This module reduces such text to a whole
//! Rupiah amount without ever failing.

/// Parses free-form currency text into whole Rupiah.
///
/// Every character that is not an ASCII digit is discarded and the remaining
/// digits are read as a base-10 integer. Empty or digit-free input yields 0.
/// Amounts beyond `u64::MAX` saturate.
///
/// Decimal separators are not recognised: `"1.500,50"` reads as `150050`.
/// The calculator works in whole Rupiah only.
///
/// # Examples
///
/// ```
/// use pesangon_engine::normalization::parse_monetary_amount;
///
/// assert_eq!(parse_monetary_amount("5.000.000"), 5_000_000);
/// assert_eq!(parse_monetary_amount("Rp 7.250.000"), 7_250_000);
/// assert_eq!(parse_monetary_amount("abc"), 0);
/// ```
pub fn parse_monetary_amount(raw: &str) -> u64 {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |amount, digit| {
            amount
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_thousands_separators() {
        assert_eq!(parse_monetary_amount("5.000.000"), 5_000_000);
        assert_eq!(parse_monetary_amount("5,000,000"), 5_000_000);
    }

    #[test]
    fn test_strips_currency_prefix_and_spaces() {
        assert_eq!(parse_monetary_amount("Rp 12.345.678"), 12_345_678);
        assert_eq!(parse_monetary_amount("Rp\u{a0}4.500.000"), 4_500_000);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(parse_monetary_amount(""), 0);
    }

    #[test]
    fn test_input_without_digits_is_zero() {
        assert_eq!(parse_monetary_amount("Rp -"), 0);
        assert_eq!(parse_monetary_amount("lima juta"), 0);
    }

    #[test]
    fn test_minus_sign_is_discarded() {
        assert_eq!(parse_monetary_amount("-5000"), 5000);
    }

    #[test]
    fn test_leading_zeros_are_ignored() {
        assert_eq!(parse_monetary_amount("000123"), 123);
    }

    #[test]
    fn test_non_ascii_digits_are_discarded() {
        // Arabic-Indic digits are not part of the accepted alphabet.
        assert_eq!(parse_monetary_amount("١٢٣"), 0);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(parse_monetary_amount("99999999999999999999999"), u64::MAX);
        assert_eq!(parse_monetary_amount("18446744073709551615"), u64::MAX);
    }
}
