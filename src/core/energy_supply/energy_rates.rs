use crate::core::units::{
    BTU_PER_CUBIC_METRE_NATURAL_GAS, BTU_PER_KILOWATT_HOUR, BTU_PER_LITRE_HEATING_OIL,
};
use crate::input::Input;
use strum_macros::Display;

/// This module contains the fuels a home can buy and the unit rates it pays for them.

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum FuelType {
    /// Heating oil, bought by the litre
    Oil,
    /// Mains electricity, bought by the kWh
    Electricity,
    /// Natural gas, bought by the cubic metre
    Gas,
}

impl FuelType {
    /// Heat content of one purchasable unit of the fuel, in BTU
    pub fn energy_content_btu(&self) -> f64 {
        match self {
            FuelType::Oil => BTU_PER_LITRE_HEATING_OIL,
            FuelType::Electricity => BTU_PER_KILOWATT_HOUR,
            FuelType::Gas => BTU_PER_CUBIC_METRE_NATURAL_GAS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyRates {
    electricity: f64,
    oil: f64,
    gas: f64,
}

impl EnergyRates {
    pub fn new(electricity: f64, oil: f64, gas: f64) -> Self {
        Self {
            electricity,
            oil,
            gas,
        }
    }

    pub fn from_input(input: &Input) -> Self {
        Self::new(input.electricity_rate, input.oil_rate, input.gas_rate)
    }

    /// Price of one unit of the given fuel
    pub fn price(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Oil => self.oil,
            FuelType::Electricity => self.electricity,
            FuelType::Gas => self.gas,
        }
    }

    /// Cost of buying `quantity` units of the given fuel
    pub fn cost(&self, fuel: FuelType, quantity: f64) -> f64 {
        quantity * self.price(fuel)
    }
}
