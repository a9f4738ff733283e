//! Tenure (masa kerja) model.
//!
//! This module defines the [`TenureDuration`] value type used to express how
//! long an employee has worked, in whole years plus remaining months.

use serde::{Deserialize, Serialize};

/// The largest value the months component may hold.
pub const MAX_TENURE_MONTHS: u32 = 11;

/// Length of employment expressed as whole years plus remaining months.
///
/// The months component always lies in `0..=11`. Construction through
/// [`TenureDuration::new`] saturates out-of-range months at 11 rather than
/// carrying them into years.
///
/// # Example
///
/// ```
/// use pesangon_engine::models::TenureDuration;
///
/// let tenure = TenureDuration::new(3, 4);
/// assert_eq!(tenure.total_months(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "TenureFields")]
pub struct TenureDuration {
    years: u32,
    months: u32,
}

#[derive(Deserialize)]
struct TenureFields {
    years: u32,
    months: u32,
}

impl From<TenureFields> for TenureDuration {
    fn from(fields: TenureFields) -> Self {
        Self::new(fields.years, fields.months)
    }
}

impl TenureDuration {
    /// Creates a tenure of `years` years and `months` months.
    ///
    /// Months above [`MAX_TENURE_MONTHS`] saturate at 11.
    pub fn new(years: u32, months: u32) -> Self {
        Self {
            years,
            months: months.min(MAX_TENURE_MONTHS),
        }
    }

    /// Returns the whole years of service.
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Returns the months of service beyond the whole years.
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Returns the total tenure in months (`years * 12 + months`).
    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12 + u64::from(self.months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_months_combines_years_and_months() {
        assert_eq!(TenureDuration::new(3, 0).total_months(), 36);
        assert_eq!(TenureDuration::new(1, 11).total_months(), 23);
        assert_eq!(TenureDuration::new(0, 0).total_months(), 0);
    }

    #[test]
    fn test_months_saturate_without_carry() {
        let tenure = TenureDuration::new(1, 14);
        assert_eq!(tenure.years(), 1);
        assert_eq!(tenure.months(), 11);
        assert_eq!(tenure.total_months(), 23);
    }

    #[test]
    fn test_total_months_does_not_overflow_for_max_years() {
        let tenure = TenureDuration::new(u32::MAX, 11);
        assert_eq!(tenure.total_months(), u64::from(u32::MAX) * 12 + 11);
    }

    #[test]
    fn test_serializes_years_and_months() {
        let json = serde_json::to_value(TenureDuration::new(5, 2)).unwrap();
        assert_eq!(json["years"], 5);
        assert_eq!(json["months"], 2);
    }

    #[test]
    fn test_deserialize_saturates_months() {
        let tenure: TenureDuration =
            serde_json::from_str(r#"{"years": 2, "months": 30}"#).unwrap();
        assert_eq!(tenure, TenureDuration::new(2, 11));
    }
}
