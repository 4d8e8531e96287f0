use crate::core::energy_supply::energy_rates::FuelType;
use crate::core::heating_systems::SpaceHeatSystem;
use crate::input::HeatingSystem;

/// This module provides the heating systems a heat pump would replace: furnaces
/// burning oil or gas, and resistive electric baseboards.

impl HeatingSystem {
    /// Fraction of the fuel's heat content delivered into the home
    pub fn efficiency(&self) -> f64 {
        match self {
            HeatingSystem::OilFurnace => 0.80,
            HeatingSystem::ElectricBaseboards => 1.00,
            HeatingSystem::GasFurnace => 0.85,
        }
    }
}

impl SpaceHeatSystem for HeatingSystem {
    fn fuel_type(&self) -> FuelType {
        match self {
            HeatingSystem::OilFurnace => FuelType::Oil,
            HeatingSystem::ElectricBaseboards => FuelType::Electricity,
            HeatingSystem::GasFurnace => FuelType::Gas,
        }
    }

    fn fuel_demand(&self, heating_load_btu: f64) -> f64 {
        heating_load_btu / (self.fuel_type().energy_content_btu() * self.efficiency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::energy_supply::energy_rates::EnergyRates;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use strum::IntoEnumIterator;

    const HEATING_LOAD_BTU: f64 = 72_000_000.;

    #[rstest]
    #[case(HeatingSystem::OilFurnace, FuelType::Oil)]
    #[case(HeatingSystem::ElectricBaseboards, FuelType::Electricity)]
    #[case(HeatingSystem::GasFurnace, FuelType::Gas)]
    fn test_fuel_type(#[case] system: HeatingSystem, #[case] expected: FuelType) {
        assert_eq!(system.fuel_type(), expected);
    }

    #[rstest]
    fn test_efficiencies_are_fractions() {
        for system in HeatingSystem::iter() {
            let efficiency = system.efficiency();
            assert!(efficiency > 0. && efficiency <= 1., "{system} efficiency");
        }
    }

    #[rstest]
    #[case(HeatingSystem::OilFurnace, 72_000_000. / (36_000. * 0.80))]
    #[case(HeatingSystem::ElectricBaseboards, 72_000_000. / (3_412. * 1.00))]
    #[case(HeatingSystem::GasFurnace, 72_000_000. / (35_300. * 0.85))]
    fn test_fuel_demand(#[case] system: HeatingSystem, #[case] expected: f64) {
        assert_relative_eq!(system.fuel_demand(HEATING_LOAD_BTU), expected);
    }

    #[rstest]
    fn test_annual_heating_cost_for_oil_furnace() {
        let rates = EnergyRates::new(0.15, 1.20, 1.50);
        assert_relative_eq!(
            HeatingSystem::OilFurnace.annual_heating_cost(HEATING_LOAD_BTU, &rates),
            3000.,
            max_relative = 1e-12
        );
    }

    #[rstest]
    fn test_annual_heating_cost_uses_matching_rate() {
        let rates = EnergyRates::new(1., 0., 0.);
        assert_eq!(
            HeatingSystem::GasFurnace.annual_heating_cost(HEATING_LOAD_BTU, &rates),
            0.
        );
        assert!(
            HeatingSystem::ElectricBaseboards.annual_heating_cost(HEATING_LOAD_BTU, &rates) > 0.
        );
    }
}
