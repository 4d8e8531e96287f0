use crate::core::units::MONTHS_PER_YEAR;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// This module spreads annual loads over the calendar year.

#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Position of the month in the year, counting January as 0
    pub fn index(&self) -> usize {
        *self as usize
    }
}

pub const ALL_MONTHS: [Month; MONTHS_PER_YEAR] = [
    Month::Jan,
    Month::Feb,
    Month::Mar,
    Month::Apr,
    Month::May,
    Month::Jun,
    Month::Jul,
    Month::Aug,
    Month::Sep,
    Month::Oct,
    Month::Nov,
    Month::Dec,
];

/// Fraction of the annual heating load falling in each month, January first
pub const HEATING_LOAD_DISTRIBUTION: [f64; MONTHS_PER_YEAR] = [
    0.18, 0.16, 0.13, 0.08, 0.03, 0.00, 0.00, 0.00, 0.02, 0.07, 0.13, 0.20,
];

/// Fraction of the annual cooling load falling in each month, January first
pub const COOLING_LOAD_DISTRIBUTION: [f64; MONTHS_PER_YEAR] = [
    0.00, 0.00, 0.00, 0.00, 0.05, 0.20, 0.35, 0.30, 0.10, 0.00, 0.00, 0.00,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyWeights {
    pub heating: f64,
    pub cooling: f64,
}

pub fn monthly_weights(month: Month) -> MonthlyWeights {
    MonthlyWeights {
        heating: HEATING_LOAD_DISTRIBUTION[month.index()],
        cooling: COOLING_LOAD_DISTRIBUTION[month.index()],
    }
}
