use crate::core::cooling_systems::SpaceCoolSystem;
use crate::core::energy_supply::energy_rates::FuelType;
use crate::core::heating_systems::SpaceHeatSystem;
use crate::core::units::BTU_PER_KILOWATT_HOUR;

/// This module provides an object to represent the cold-climate heat pump being
/// considered as a replacement for both the heating and the cooling equipment.

/// The replacement unit evaluated by the estimator.
pub const COLD_CLIMATE_HEAT_PUMP: HeatPump = HeatPump::new(3.5, 18.);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatPump {
    cop_heating: f64,
    seer: f64,
}

impl HeatPump {
    /// Arguments:
    /// * `cop_heating` - coefficient of performance when heating
    /// * `seer` - SEER rating when cooling
    pub const fn new(cop_heating: f64, seer: f64) -> Self {
        Self { cop_heating, seer }
    }

    /// Scale a known annual heating bill down by the heat pump's COP.
    pub fn heating_cost_from_current(&self, current_heating_cost: f64) -> f64 {
        current_heating_cost / self.cop_heating
    }

    /// Scale a known annual cooling bill by the ratio of the existing equipment's SEER
    /// to the heat pump's SEER.
    ///
    /// Note this is the ratio as used by the manual-entry calculation, current over heat
    /// pump, so a better existing unit raises the heat pump figure.
    pub fn cooling_cost_from_current(&self, current_cooling_cost: f64, current_seer: f64) -> f64 {
        current_cooling_cost * (current_seer / self.seer)
    }
}

impl SpaceHeatSystem for HeatPump {
    fn fuel_type(&self) -> FuelType {
        FuelType::Electricity
    }

    fn fuel_demand(&self, heating_load_btu: f64) -> f64 {
        heating_load_btu / (BTU_PER_KILOWATT_HOUR * self.cop_heating)
    }
}

impl SpaceCoolSystem for HeatPump {
    fn seer(&self) -> f64 {
        self.seer
    }
}
