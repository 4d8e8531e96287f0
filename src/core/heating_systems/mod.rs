use crate::core::energy_supply::energy_rates::{EnergyRates, FuelType};

pub mod conventional;
pub mod heat_pump;

pub trait SpaceHeatSystem {
    /// Return the fuel the system buys to deliver heat
    fn fuel_type(&self) -> FuelType;

    /// Return the units of fuel needed to meet an annual heating load given in BTU
    fn fuel_demand(&self, heating_load_btu: f64) -> f64;

    /// Annual cost of meeting the heating load at the given rates
    fn annual_heating_cost(&self, heating_load_btu: f64, rates: &EnergyRates) -> f64 {
        rates.cost(self.fuel_type(), self.fuel_demand(heating_load_btu))
    }
}
