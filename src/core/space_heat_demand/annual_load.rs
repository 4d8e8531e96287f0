/// This module turns the size of a home into the heat it needs each year, using
/// fixed load intensities and season lengths rather than a fabric model.

/// Peak heating load per square foot of floor area, in BTU per hour
pub const HEATING_INTENSITY_BTU_PER_SQ_FT: f64 = 40.;
/// Peak cooling load per square foot of floor area, in BTU per hour
pub const COOLING_INTENSITY_BTU_PER_SQ_FT: f64 = 20.;
/// Equivalent full-load hours of heating in a year
pub const HEATING_HOURS_PER_YEAR: f64 = 1200.;
/// Equivalent full-load hours of cooling in a year
pub const COOLING_HOURS_PER_YEAR: f64 = 800.;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnualLoads {
    /// Heat to be delivered over a year, in BTU
    pub heating_btu: f64,
    /// Heat to be removed over a year, in BTU
    pub cooling_btu: f64,
}

impl AnnualLoads {
    /// Arguments:
    /// * `floor_area` - in square feet; non-positive areas are carried through as-is
    pub fn for_floor_area(floor_area: f64) -> Self {
        let peak_heating_btu_per_hour = floor_area * HEATING_INTENSITY_BTU_PER_SQ_FT;
        let peak_cooling_btu_per_hour = floor_area * COOLING_INTENSITY_BTU_PER_SQ_FT;

        Self {
            heating_btu: peak_heating_btu_per_hour * HEATING_HOURS_PER_YEAR,
            cooling_btu: peak_cooling_btu_per_hour * COOLING_HOURS_PER_YEAR,
        }
    }
}
