use crate::core::cooling_systems::SpaceCoolSystem;
use crate::input::{CoolingSystem, Input};

/// This module provides objects to represent the air conditioning a home already has.

impl CoolingSystem {
    pub fn provides_cooling(&self) -> bool {
        !matches!(self, CoolingSystem::NoCooling)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirConditioning {
    seer: f64,
}

impl AirConditioning {
    /// Construct an air conditioning object
    ///
    /// Returns `None` for a home without cooling, which has no equipment to model.
    ///
    /// Arguments:
    /// * `system` - kind of air conditioning installed
    /// * `seer` - SEER rating of the installed equipment
    pub fn new(system: CoolingSystem, seer: f64) -> Option<Self> {
        system.provides_cooling().then_some(Self { seer })
    }

    pub fn from_input(input: &Input) -> Option<Self> {
        Self::new(input.cooling_system, input.current_seer)
    }
}

impl SpaceCoolSystem for AirConditioning {
    fn seer(&self) -> f64 {
        self.seer
    }
}
