use crate::core::energy_supply::energy_rates::{EnergyRates, FuelType};
use crate::core::units::{BASELINE_SEER, BTU_PER_KILOWATT_HOUR};

pub mod air_conditioning;

pub trait SpaceCoolSystem {
    /// Return the SEER rating of the cooling equipment
    fn seer(&self) -> f64;

    /// Return the electricity (in kWh) needed to meet an annual cooling load given in BTU
    fn electricity_demand(&self, cooling_load_btu: f64) -> f64 {
        cooling_load_btu / (BTU_PER_KILOWATT_HOUR * (self.seer() / BASELINE_SEER))
    }

    /// Annual cost of meeting the cooling load at the given rates
    fn annual_cooling_cost(&self, cooling_load_btu: f64, rates: &EnergyRates) -> f64 {
        rates.cost(
            FuelType::Electricity,
            self.electricity_demand(cooling_load_btu),
        )
    }
}
