//! Fixed-order numeric encoding of the agent state

use serde::{Deserialize, Serialize};

use crate::entity::state::StateVector;

pub const OBSERVATION_SIZE: usize = 9;

/// Dimensionless view of a [`StateVector`]
///
/// Order: health, hunger, hydration, stamina, temperature, day, inventory,
/// injuries, advisory flag. Values are ratios, not guaranteed to sit in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub [f32; OBSERVATION_SIZE]);

impl Observation {
    pub fn encode(state: &StateVector) -> Self {
        Self([
            state.health / 100.0,
            state.hunger / 100.0,
            state.hydration / 100.0,
            state.stamina / 100.0,
            (state.temperature - 35.0) / 5.0,
            state.day as f32 / 365.0,
            state.inventory.total() as f32 / 50.0,
            state.injury_count() as f32 / 10.0,
            if state.advisory_active { 1.0 } else { 0.0 },
        ])
    }

    /// Raw bit patterns, for exact comparisons across runs
    pub fn to_bits(&self) -> [u32; OBSERVATION_SIZE] {
        self.0.map(f32::to_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ResourceKind;

    #[test]
    fn test_encode_baseline() {
        let mut state = StateVector::baseline();
        state.inventory.set(ResourceKind::Food, 5);
        state.inventory.set(ResourceKind::Water, 5);

        let obs = Observation::encode(&state);

        assert_eq!(obs.0[0], 1.0);
        assert_eq!(obs.0[1], 0.5);
        assert_eq!(obs.0[2], 0.5);
        assert_eq!(obs.0[3], 0.8);
        assert!((obs.0[4] - 0.4).abs() < 1e-6);
        assert_eq!(obs.0[5], 1.0 / 365.0);
        assert_eq!(obs.0[6], 0.2);
        assert_eq!(obs.0[7], 0.0);
        assert_eq!(obs.0[8], 0.0);
    }

    #[test]
    fn test_encode_flags_and_injuries() {
        let mut state = StateVector::baseline();
        state.advisory_active = true;
        state.record_injury("burn");
        state.record_injury("cut");
        state.day = 400;

        let obs = Observation::encode(&state);

        assert_eq!(obs.0[7], 0.2);
        assert_eq!(obs.0[8], 1.0);
        assert!(obs.0[5] > 1.0);
    }
}
