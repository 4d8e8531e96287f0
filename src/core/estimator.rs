use crate::core::cooling_systems::air_conditioning::AirConditioning;
use crate::core::cooling_systems::SpaceCoolSystem;
use crate::core::energy_supply::energy_rates::EnergyRates;
use crate::core::heating_systems::heat_pump::{HeatPump, COLD_CLIMATE_HEAT_PUMP};
use crate::core::heating_systems::SpaceHeatSystem;
use crate::core::schedule::{monthly_weights, Month, ALL_MONTHS};
use crate::core::space_heat_demand::annual_load::AnnualLoads;
use crate::core::units::MONTHS_PER_YEAR;
use crate::input::Input;
use serde::{Deserialize, Serialize};

/// This module compares what a home spends on heating and cooling today with what
/// it would spend after switching to a cold-climate heat pump.

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Savings {
    pub heating: f64,
    pub cooling: f64,
    pub total: f64,
}

impl Savings {
    fn new(heating: f64, cooling: f64) -> Self {
        Self {
            heating,
            cooling,
            total: heating + cooling,
        }
    }

    fn per_month(&self) -> Self {
        let months = MONTHS_PER_YEAR as f64;
        Self {
            heating: self.heating / months,
            cooling: self.cooling / months,
            total: self.total / months,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct MonthlyRecord {
    pub month: Month,
    pub current_total: f64,
    pub heat_pump_total: f64,
    pub savings: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CostEstimate {
    pub current_heating_cost: f64,
    pub current_cooling_cost: f64,
    pub heat_pump_heating_cost: f64,
    pub heat_pump_cooling_cost: f64,
    pub annual_savings: Savings,
    pub monthly_savings: Savings,
    pub monthly_breakdown: [MonthlyRecord; MONTHS_PER_YEAR],
}

impl CostEstimate {
    pub fn current_total_cost(&self) -> f64 {
        self.current_heating_cost + self.current_cooling_cost
    }

    pub fn heat_pump_total_cost(&self) -> f64 {
        self.heat_pump_heating_cost + self.heat_pump_cooling_cost
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct AnnualCosts {
    current_heating: f64,
    current_cooling: f64,
    heat_pump_heating: f64,
    heat_pump_cooling: f64,
}

/// Estimate annual and monthly costs under the current equipment and under a
/// cold-climate heat pump, along with the savings from switching.
///
/// This is a pure function of the input; hosts call it again whenever any input
/// changes.
pub fn estimate(input: &Input) -> CostEstimate {
    let costs = if input.manual_mode {
        annual_costs_from_known_bills(input, &COLD_CLIMATE_HEAT_PUMP)
    } else {
        annual_costs_from_floor_area(input, &COLD_CLIMATE_HEAT_PUMP)
    };

    let annual_savings = Savings::new(
        costs.current_heating - costs.heat_pump_heating,
        costs.current_cooling - costs.heat_pump_cooling,
    );

    CostEstimate {
        current_heating_cost: costs.current_heating,
        current_cooling_cost: costs.current_cooling,
        heat_pump_heating_cost: costs.heat_pump_heating,
        heat_pump_cooling_cost: costs.heat_pump_cooling,
        annual_savings,
        monthly_savings: annual_savings.per_month(),
        monthly_breakdown: ALL_MONTHS.map(|month| monthly_record(month, &costs)),
    }
}

/// Derive heat pump costs from annual bills the user already knows, rather than
/// from the size of the home.
fn annual_costs_from_known_bills(input: &Input, heat_pump: &HeatPump) -> AnnualCosts {
    let current_heating = input.manual_heating_cost();
    let current_cooling = input.manual_cooling_cost();

    let heat_pump_cooling = if input.cooling_system.provides_cooling() {
        heat_pump.cooling_cost_from_current(current_cooling, input.current_seer)
    } else {
        0.
    };

    AnnualCosts {
        current_heating,
        current_cooling,
        heat_pump_heating: heat_pump.heating_cost_from_current(current_heating),
        heat_pump_cooling,
    }
}

fn annual_costs_from_floor_area(input: &Input, heat_pump: &HeatPump) -> AnnualCosts {
    let loads = AnnualLoads::for_floor_area(input.home_size);
    let rates = EnergyRates::from_input(input);

    let (current_cooling, heat_pump_cooling) = match AirConditioning::from_input(input) {
        Some(air_conditioning) => (
            air_conditioning.annual_cooling_cost(loads.cooling_btu, &rates),
            heat_pump.annual_cooling_cost(loads.cooling_btu, &rates),
        ),
        None => (0., 0.),
    };

    AnnualCosts {
        current_heating: input
            .heating_system
            .annual_heating_cost(loads.heating_btu, &rates),
        current_cooling,
        heat_pump_heating: heat_pump.annual_heating_cost(loads.heating_btu, &rates),
        heat_pump_cooling,
    }
}

fn monthly_record(month: Month, costs: &AnnualCosts) -> MonthlyRecord {
    let weights = monthly_weights(month);
    let current_total =
        costs.current_heating * weights.heating + costs.current_cooling * weights.cooling;
    let heat_pump_total =
        costs.heat_pump_heating * weights.heating + costs.heat_pump_cooling * weights.cooling;

    MonthlyRecord {
        month,
        current_total,
        heat_pump_total,
        savings: current_total - heat_pump_total,
    }
}
