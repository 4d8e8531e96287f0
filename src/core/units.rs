pub const BTU_PER_KILOWATT_HOUR: f64 = 3_412.;
pub const BTU_PER_LITRE_HEATING_OIL: f64 = 36_000.;
pub const BTU_PER_CUBIC_METRE_NATURAL_GAS: f64 = 35_300.;
pub const MONTHS_PER_YEAR: usize = 12;

/// SEER against which cooling equipment ratings are normalised when converting a
/// cooling load into electricity use.
pub const BASELINE_SEER: f64 = 10.;
