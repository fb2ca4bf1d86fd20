//! Agent physiological and resource state

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Day, ResourceKind, Step};
use crate::entity::inventory::Inventory;

pub const VITAL_MIN: f32 = 0.0;
pub const VITAL_MAX: f32 = 100.0;
pub const TEMPERATURE_MIN: f32 = 35.0;
pub const TEMPERATURE_MAX: f32 = 40.0;

/// Steps that make up one in-world day
pub const STEPS_PER_DAY: Step = 48;

/// A recorded injury; only counted by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    pub description: String,
    pub step: Step,
}

/// Full state of the simulated agent for one episode
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// 0 = dead, 100 = perfect health
    pub health: f32,
    /// 0 = sated, 100 = starving
    pub hunger: f32,
    /// 0 = parched, 100 = fully hydrated
    pub hydration: f32,
    pub stamina: f32,
    /// Body temperature in °C
    pub temperature: f32,
    pub day: Day,
    pub inventory: Inventory,
    pub injuries: Vec<Injury>,
    /// Set once an emergency-classified advisory query has been issued
    pub advisory_active: bool,
    pub step_count: Step,
}

impl StateVector {
    /// Baseline vitals with an empty inventory
    pub fn baseline() -> Self {
        Self {
            health: 100.0,
            hunger: 50.0,
            hydration: 50.0,
            stamina: 80.0,
            temperature: 37.0,
            day: 1,
            inventory: Inventory::new(),
            injuries: Vec::new(),
            advisory_active: false,
            step_count: 0,
        }
    }

    /// Baseline vitals with a randomized starting inventory
    pub fn initial<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self::baseline();
        state.inventory.set(ResourceKind::Food, rng.gen_range(1..=3));
        state.inventory.set(ResourceKind::Water, rng.gen_range(2..=4));
        state.inventory.set(ResourceKind::Materials, rng.gen_range(2..=5));
        state.inventory.set(ResourceKind::Medicine, rng.gen_range(0..=2));
        state
    }

    /// Clamp every vital into its legal range
    pub fn clamp(&mut self) {
        self.health = self.health.clamp(VITAL_MIN, VITAL_MAX);
        self.hunger = self.hunger.clamp(VITAL_MIN, VITAL_MAX);
        self.hydration = self.hydration.clamp(VITAL_MIN, VITAL_MAX);
        self.stamina = self.stamina.clamp(VITAL_MIN, VITAL_MAX);
        self.temperature = self.temperature.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn record_injury(&mut self, description: impl Into<String>) {
        self.injuries.push(Injury {
            description: description.into(),
            step: self.step_count,
        });
    }

    pub fn injury_count(&self) -> usize {
        self.injuries.len()
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::baseline()
    }
}
