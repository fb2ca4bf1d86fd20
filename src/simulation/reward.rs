//! Continuous reward shaping

use crate::entity::state::StateVector;

/// Reward for simply being in `state`, added to every step's action reward
pub fn base_reward(state: &StateVector) -> f32 {
    let inventory_total = state.inventory.total() as f32;

    state.health / 200.0 - state.hunger / 200.0 - (100.0 - state.hydration) / 200.0
        + 0.1 * inventory_total / 100.0
        + 0.01 * state.day as f32
}
