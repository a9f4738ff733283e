//! Tenure-banded multiplier tables.
//!
//! Both severance pay and service appreciation pay are a number of months of
//! salary chosen by tenure band. The bands are half-open: a band ending at 12
//! covers tenures up to and including 11 months, and 12 months falls into the
//! next band.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered table of `(exclusive_upper_bound, multiplier)` bands.
///
/// A tenure `m` takes the multiplier of the first band whose upper bound is
/// greater than `m`. Tenures at or above the last bound take the `ceiling`
/// multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplierTable {
    bands: &'static [(u64, u32)],
    ceiling: u32,
}

/// The band a tenure fell into, for audit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierBand {
    /// Inclusive lower bound in months.
    pub lower_months: u64,
    /// Exclusive upper bound in months; `None` for the open-ended top band.
    pub upper_months: Option<u64>,
    /// Months of salary paid in this band.
    pub multiplier: u32,
}

impl fmt::Display for MultiplierBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper_months {
            Some(upper) => write!(f, "{}-{} months", self.lower_months, upper - 1),
            None => write!(f, "{}+ months", self.lower_months),
        }
    }
}

/// Severance pay (UP) bands: one extra month of salary per year of service,
/// capped at nine.
pub const SEVERANCE_TABLE: MultiplierTable = MultiplierTable {
    bands: &[
        (12, 1),
        (24, 2),
        (36, 3),
        (48, 4),
        (60, 5),
        (72, 6),
        (84, 7),
        (96, 8),
    ],
    ceiling: 9,
};

/// Service appreciation pay (UPMK) bands in three-year blocks, starting at
/// three years. The top block pays ten months; nine is never paid.
pub const SERVICE_APPRECIATION_TABLE: MultiplierTable = MultiplierTable {
    bands: &[
        (36, 0),
        (72, 2),
        (108, 3),
        (144, 4),
        (180, 5),
        (216, 6),
        (252, 7),
        (288, 8),
    ],
    ceiling: 10,
};

impl MultiplierTable {
    /// Returns the multiplier for a tenure of `total_months`.
    pub fn multiplier(&self, total_months: u64) -> u32 {
        self.band(total_months).multiplier
    }

    /// Returns the band a tenure of `total_months` falls into.
    pub fn band(&self, total_months: u64) -> MultiplierBand {
        let mut lower_months = 0;
        for &(upper, multiplier) in self.bands {
            if total_months < upper {
                return MultiplierBand {
                    lower_months,
                    upper_months: Some(upper),
                    multiplier,
                };
            }
            lower_months = upper;
        }

        MultiplierBand {
            lower_months,
            upper_months: None,
            multiplier: self.ceiling,
        }
    }
}

/// Returns the severance pay multiplier for a tenure in months.
///
/// # Examples
///
/// ```
/// use pesangon_engine::calculation::severance_multiplier;
///
/// assert_eq!(severance_multiplier(11), 1);
/// assert_eq!(severance_multiplier(12), 2);
/// assert_eq!(severance_multiplier(500), 9);
/// ```
pub fn severance_multiplier(total_months: u64) -> u32 {
    SEVERANCE_TABLE.multiplier(total_months)
}

/// Returns the service appreciation pay multiplier for a tenure in months.
///
/// # Examples
///
/// ```
/// use pesangon_engine::calculation::service_appreciation_multiplier;
///
/// assert_eq!(service_appreciation_multiplier(35), 0);
/// assert_eq!(service_appreciation_multiplier(36), 2);
/// assert_eq!(service_appreciation_multiplier(288), 10);
/// ```
pub fn service_appreciation_multiplier(total_months: u64) -> u32 {
    SERVICE_APPRECIATION_TABLE.multiplier(total_months)
}
