//! Per-step environmental decay and regeneration

use rand::Rng;

use crate::entity::state::{StateVector, VITAL_MAX};

const HUNGER_RATE: f32 = 2.0;
const HYDRATION_RATE: f32 = 1.5;

const STARVING_HUNGER: f32 = 80.0;
const STARVING_PENALTY: f32 = 5.0;
const HUNGRY_HUNGER: f32 = 60.0;
const HUNGRY_PENALTY: f32 = 2.0;

const PARCHED_HYDRATION: f32 = 20.0;
const PARCHED_PENALTY: f32 = 8.0;
const THIRSTY_HYDRATION: f32 = 40.0;
const THIRSTY_PENALTY: f32 = 3.0;

const TEMPERATURE_JITTER: f32 = 0.5;

const REGEN_MAX_HUNGER: f32 = 40.0;
const REGEN_MIN_HYDRATION: f32 = 60.0;
const REGEN_HEALTH: f32 = 1.0;
const REGEN_STAMINA: f32 = 2.0;

/// Apply one step of environmental pressure to `state`
///
/// Runs after action resolution. Ends with a full clamp, so every vital is
/// back in range when this returns.
pub fn apply_environment<R: Rng + ?Sized>(state: &mut StateVector, difficulty: f32, rng: &mut R) {
    state.hunger += HUNGER_RATE * difficulty;
    state.hydration -= HYDRATION_RATE * difficulty;

    if state.hunger > STARVING_HUNGER {
        state.health -= STARVING_PENALTY;
    } else if state.hunger > HUNGRY_HUNGER {
        state.health -= HUNGRY_PENALTY;
    }

    if state.hydration < PARCHED_HYDRATION {
        state.health -= PARCHED_PENALTY;
    } else if state.hydration < THIRSTY_HYDRATION {
        state.health -= THIRSTY_PENALTY;
    }

    state.temperature += rng.gen_range(-TEMPERATURE_JITTER..=TEMPERATURE_JITTER);

    if state.hunger < REGEN_MAX_HUNGER && state.hydration > REGEN_MIN_HYDRATION {
        state.health = (state.health + REGEN_HEALTH).min(VITAL_MAX);
        state.stamina = (state.stamina + REGEN_STAMINA).min(VITAL_MAX);
    }

    state.clamp();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn apply(state: &mut StateVector, difficulty: f32) {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        apply_environment(state, difficulty, &mut rng);
    }

    #[test]
    fn test_baseline_decay() {
        let mut state = StateVector::baseline();
        apply(&mut state, 1.0);

        assert_eq!(state.hunger, 52.0);
        assert_eq!(state.hydration, 48.5);
        assert_eq!(state.health, 100.0);
        assert!(state.temperature >= 36.5 && state.temperature <= 37.5);
    }

    #[test]
    fn test_difficulty_scales_decay() {
        let mut state = StateVector::baseline();
        apply(&mut state, 2.0);

        assert_eq!(state.hunger, 54.0);
        assert_eq!(state.hydration, 47.0);
    }

    #[test]
    fn test_hunger_tiers_are_exclusive() {
        let mut state = StateVector::baseline();
        state.hunger = 85.0;
        apply(&mut state, 1.0);
        assert_eq!(state.health, 95.0);

        let mut state = StateVector::baseline();
        state.hunger = 65.0;
        apply(&mut state, 1.0);
        assert_eq!(state.health, 98.0);
    }

    #[test]
    fn test_hydration_tiers_are_exclusive() {
        let mut state = StateVector::baseline();
        state.hydration = 10.0;
        apply(&mut state, 1.0);
        assert_eq!(state.health, 92.0);

        let mut state = StateVector::baseline();
        state.hydration = 30.0;
        apply(&mut state, 1.0);
        assert_eq!(state.health, 97.0);
    }

    #[test]
    fn test_regeneration_when_fed_and_watered() {
        let mut state = StateVector::baseline();
        state.health = 50.0;
        state.stamina = 50.0;
        state.hunger = 10.0;
        state.hydration = 90.0;
        apply(&mut state, 1.0);

        assert_eq!(state.health, 51.0);
        assert_eq!(state.stamina, 52.0);
    }

    #[test]
    fn test_clamps_out_of_range_values() {
        let mut state = StateVector::baseline();
        state.hunger = 105.0;
        state.stamina = -9.0;
        state.hydration = 0.5;
        state.health = 4.0;
        apply(&mut state, 1.0);

        assert_eq!(state.hunger, 100.0);
        assert_eq!(state.stamina, 0.0);
        assert_eq!(state.hydration, 0.0);
        assert_eq!(state.health, 0.0);
        assert!(state.temperature >= 35.0 && state.temperature <= 40.0);
    }
}
