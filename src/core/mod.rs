pub mod cooling_systems;
pub mod energy_supply;
pub mod estimator;
pub mod heating_systems;
pub mod schedule;
pub mod space_heat_demand;
pub mod units;
