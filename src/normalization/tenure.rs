//! Tenure input normalization.
//!
//! Tenure arrives as two separate integer fields (years and months). This
//! module reads those fields leniently and clamps them into the ranges the
//! calculator accepts.

use crate::models::{MAX_TENURE_MONTHS, TenureDuration};

/// Reads the leading integer of a form field.
///
/// Leading whitespace is skipped, an optional `+` or `-` sign is accepted,
/// and then as many ASCII digits as follow are consumed. Anything after the
/// digits is ignored, so `"3 tahun"` reads as 3 and `"2.5"` as 2. Input with
/// no leading digits yields `None`. Values outside `i64` saturate.
///
/// # Examples
///
/// ```
/// use pesangon_engine::normalization::parse_integer_field;
///
/// assert_eq!(parse_integer_field(" 12"), Some(12));
/// assert_eq!(parse_integer_field("-4"), Some(-4));
/// assert_eq!(parse_integer_field("tiga"), None);
/// ```
pub fn parse_integer_field(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    seen_digit.then_some(value)
}

/// Normalizes the years-of-service field.
///
/// Missing or negative values yield 0. There is no upper bound beyond
/// saturation at `u32::MAX`; interfaces that want a narrower range (a slider
/// up to 50, say) enforce it themselves.
///
/// # Examples
///
/// ```
/// use pesangon_engine::normalization::clamp_tenure_years;
///
/// assert_eq!(clamp_tenure_years(Some(7)), 7);
/// assert_eq!(clamp_tenure_years(Some(-2)), 0);
/// assert_eq!(clamp_tenure_years(None), 0);
/// ```
pub fn clamp_tenure_years(raw: Option<i64>) -> u32 {
    match raw {
        Some(years) if years > 0 => u32::try_from(years).unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Normalizes the months-of-service field into `0..=11`.
///
/// Missing values yield 0, negative values saturate at 0 and values above
/// 11 saturate at 11. Months are never carried into years; deciding whether
/// 14 months means one year and two months is left to the caller.
///
/// # Examples
///
/// ```
/// use pesangon_engine::normalization::clamp_tenure_months;
///
/// assert_eq!(clamp_tenure_months(Some(15)), 11);
/// assert_eq!(clamp_tenure_months(Some(-1)), 0);
/// ```
pub fn clamp_tenure_months(raw: Option<i64>) -> u32 {
    match raw {
        Some(months) => months.clamp(0, i64::from(MAX_TENURE_MONTHS)) as u32,
        None => 0,
    }
}

/// Normalizes both tenure fields from their raw text.
///
/// # Examples
///
/// ```
/// use pesangon_engine::normalization::normalize_tenure;
///
/// let tenure = normalize_tenure("3", "15");
/// assert_eq!(tenure.years(), 3);
/// assert_eq!(tenure.months(), 11);
/// ```
pub fn normalize_tenure(years: &str, months: &str) -> TenureDuration {
    TenureDuration::new(
        clamp_tenure_years(parse_integer_field(years)),
        clamp_tenure_months(parse_integer_field(months)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_integer_field("42"), Some(42));
        assert_eq!(parse_integer_field("0"), Some(0));
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_integer_field("3 tahun"), Some(3));
        assert_eq!(parse_integer_field("2.9"), Some(2));
        assert_eq!(parse_integer_field("10abc"), Some(10));
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!(parse_integer_field("+5"), Some(5));
        assert_eq!(parse_integer_field("-5"), Some(-5));
        assert_eq!(parse_integer_field("-"), None);
        assert_eq!(parse_integer_field("--5"), None);
    }

    #[test]
    fn test_parse_without_leading_digits_is_none() {
        assert_eq!(parse_integer_field(""), None);
        assert_eq!(parse_integer_field("   "), None);
        assert_eq!(parse_integer_field("abc"), None);
        assert_eq!(parse_integer_field(".5"), None);
    }

    #[test]
    fn test_parse_skips_leading_whitespace() {
        assert_eq!(parse_integer_field("\t 8"), Some(8));
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_integer_field("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_integer_field("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_years_negative_or_missing_is_zero() {
        assert_eq!(clamp_tenure_years(Some(-1)), 0);
        assert_eq!(clamp_tenure_years(Some(i64::MIN)), 0);
        assert_eq!(clamp_tenure_years(None), 0);
    }

    #[test]
    fn test_years_have_no_fifty_year_cap() {
        assert_eq!(clamp_tenure_years(Some(75)), 75);
    }

    #[test]
    fn test_years_saturate_at_u32_max() {
        assert_eq!(clamp_tenure_years(Some(i64::MAX)), u32::MAX);
    }

    #[test]
    fn test_months_clamp_into_range() {
        assert_eq!(clamp_tenure_months(Some(15)), 11);
        assert_eq!(clamp_tenure_months(Some(11)), 11);
        assert_eq!(clamp_tenure_months(Some(0)), 0);
        assert_eq!(clamp_tenure_months(Some(-3)), 0);
        assert_eq!(clamp_tenure_months(None), 0);
    }

    #[test]
    fn test_normalize_tenure_does_not_carry_months() {
        let tenure = normalize_tenure("1", "14");
        assert_eq!(tenure.years(), 1);
        assert_eq!(tenure.months(), 11);
        assert_eq!(tenure.total_months(), 23);
    }

    #[test]
    fn test_normalize_tenure_garbled_fields() {
        let tenure = normalize_tenure("x", "");
        assert_eq!(tenure.total_months(), 0);
    }
}
