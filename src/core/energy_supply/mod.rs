pub mod energy_rates;
