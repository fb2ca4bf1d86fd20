//! Action resolution
//!
//! Applies one action to the agent state and reports the partial reward.
//! Vitals are capped where an action raises them; the full clamp happens
//! afterwards in environment dynamics, so an action may leave stamina or
//! hunger briefly outside their range.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::actions::catalog::{Action, ActionCategory};
use crate::advisory::Advisor;
use crate::core::error::SimError;
use crate::core::types::ResourceKind;
use crate::entity::state::{StateVector, TEMPERATURE_MAX, VITAL_MAX};

// === SEEK WATER ===
const WATER_MIN_STAMINA: f32 = 15.0;
const WATER_STAMINA_COST: f32 = 15.0;
const WATER_REWARD: f32 = 0.2;

// === FORAGE ===
const FORAGE_MIN_STAMINA: f32 = 25.0;
const FORAGE_STAMINA_COST: f32 = 25.0;
const FORAGE_SUCCESS_CHANCE: f64 = 0.6;
/// Applied on top of the base cost when the hunt fails
const FORAGE_FAILURE_PENALTY: f32 = 10.0;
const FORAGE_REWARD: f32 = 0.3;
const FORAGE_FAILURE_REWARD: f32 = -0.1;

// === FIRE ===
const FIRE_WARMTH: f32 = 2.0;
const FIRE_HEAL: f32 = 10.0;
const FIRE_REWARD: f32 = 0.15;

// === SHELTER ===
const SHELTER_MATERIALS: u32 = 3;
const SHELTER_HEAL: f32 = 20.0;
const SHELTER_STAMINA_COST: f32 = 30.0;
const SHELTER_REWARD: f32 = 0.25;

// === REST ===
const REST_HEAL: f32 = 20.0;
const REST_STAMINA: f32 = 40.0;
const REST_HUNGER: f32 = 10.0;
const REST_REWARD: f32 = 0.1;

// === EXPLORE ===
const EXPLORE_MIN_STAMINA: f32 = 20.0;
const EXPLORE_STAMINA_COST: f32 = 25.0;
const EXPLORE_FIND_CHANCE: f64 = 0.5;
const EXPLORE_FINDS: [ResourceKind; 3] = [
    ResourceKind::Materials,
    ResourceKind::Food,
    ResourceKind::Medicine,
];
const EXPLORE_REWARD: f32 = 0.15;

// === FIRST AID ===
const FIRST_AID_MAX_HEALTH: f32 = 90.0;
const FIRST_AID_HEAL: f32 = 25.0;
const FIRST_AID_REWARD: f32 = 0.2;

// === ADVISORY ===
const ADVISORY_REWARD: f32 = 0.05;
const ADVISORY_UNAVAILABLE_REWARD: f32 = -0.1;

/// Result of resolving one action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutcome {
    pub action: Action,
    pub category: ActionCategory,
    /// Partial reward earned by the action itself
    pub reward: f32,
    /// False when a precondition failed and nothing happened
    pub applied: bool,
    pub message: String,
    pub advisory_response: Option<String>,
}

impl ActionOutcome {
    fn applied(action: Action, reward: f32, message: impl Into<String>) -> Self {
        Self {
            action,
            category: action.category(),
            reward,
            applied: true,
            message: message.into(),
            advisory_response: None,
        }
    }

    fn nothing(action: Action, reason: &str) -> Self {
        Self {
            action,
            category: action.category(),
            reward: 0.0,
            applied: false,
            message: format!("Nothing happens: {}", reason),
            advisory_response: None,
        }
    }
}

/// Resolve `action` against `state`
///
/// Survival actions whose precondition fails are zero-reward no-ops.
/// Advisory actions without an advisor earn a fixed penalty and leave the
/// state untouched.
pub fn resolve_action<R: Rng + ?Sized>(
    action: Action,
    state: &mut StateVector,
    advisor: Option<&mut dyn Advisor>,
    rng: &mut R,
) -> ActionOutcome {
    let outcome = match action {
        Action::SeekWater => seek_water(state, rng),
        Action::Forage => forage(state, rng),
        Action::MakeFire => make_fire(state),
        Action::BuildShelter => build_shelter(state),
        Action::Rest => rest(state),
        Action::Explore => explore(state, rng),
        Action::FirstAid => first_aid(state),
        Action::Idle(_) => ActionOutcome::nothing(action, "no action assigned to this id"),
        Action::AskBleeding | Action::AskWater | Action::AskHypothermia | Action::AskPlants => {
            consult(action, state, advisor)
        }
    };

    tracing::debug!(
        "Resolved {} (applied: {}, reward: {:.2}): {}",
        action,
        outcome.applied,
        outcome.reward,
        outcome.message
    );

    outcome
}

fn seek_water<R: Rng + ?Sized>(state: &mut StateVector, rng: &mut R) -> ActionOutcome {
    let action = Action::SeekWater;
    if state.stamina <= WATER_MIN_STAMINA {
        return ActionOutcome::nothing(action, "too exhausted to search for water");
    }

    let found: f32 = rng.gen_range(10.0..=30.0);
    state.hydration = (state.hydration + found).min(VITAL_MAX);
    state.inventory.add(ResourceKind::Water, 1);
    state.stamina -= WATER_STAMINA_COST;

    ActionOutcome::applied(
        action,
        WATER_REWARD,
        format!("Found water (+{:.1} hydration)", found),
    )
}

fn forage<R: Rng + ?Sized>(state: &mut StateVector, rng: &mut R) -> ActionOutcome {
    let action = Action::Forage;
    if state.stamina <= FORAGE_MIN_STAMINA {
        return ActionOutcome::nothing(action, "too exhausted to hunt");
    }

    let outcome = if rng.gen_bool(FORAGE_SUCCESS_CHANCE) {
        let food: f32 = rng.gen_range(15.0..=35.0);
        state.hunger = (state.hunger - food).max(0.0);
        state.inventory.add(ResourceKind::Food, 1);
        ActionOutcome::applied(
            action,
            FORAGE_REWARD,
            format!("Hunt succeeded (-{:.1} hunger)", food),
        )
    } else {
        state.stamina -= FORAGE_FAILURE_PENALTY;
        ActionOutcome::applied(action, FORAGE_FAILURE_REWARD, "Hunt failed")
    };

    state.stamina -= FORAGE_STAMINA_COST;
    outcome
}

fn make_fire(state: &mut StateVector) -> ActionOutcome {
    let action = Action::MakeFire;
    if !state.inventory.take(ResourceKind::Materials, 1) {
        return ActionOutcome::nothing(action, "no materials for a fire");
    }

    state.temperature = (state.temperature + FIRE_WARMTH).min(TEMPERATURE_MAX);
    state.health = (state.health + FIRE_HEAL).min(VITAL_MAX);

    ActionOutcome::applied(action, FIRE_REWARD, "Made a fire")
}

fn build_shelter(state: &mut StateVector) -> ActionOutcome {
    let action = Action::BuildShelter;
    if !state.inventory.take(ResourceKind::Materials, SHELTER_MATERIALS) {
        return ActionOutcome::nothing(action, "not enough materials for a shelter");
    }

    state.health = (state.health + SHELTER_HEAL).min(VITAL_MAX);
    state.stamina -= SHELTER_STAMINA_COST;

    ActionOutcome::applied(action, SHELTER_REWARD, "Built a shelter")
}

fn rest(state: &mut StateVector) -> ActionOutcome {
    let efficiency = (state.hydration / 100.0).min(1.0);
    state.health = (state.health + REST_HEAL * efficiency).min(VITAL_MAX);
    state.stamina = (state.stamina + REST_STAMINA * efficiency).min(VITAL_MAX);
    // Clamped later by environment dynamics
    state.hunger += REST_HUNGER;

    ActionOutcome::applied(
        Action::Rest,
        REST_REWARD,
        format!("Rested ({:.0}% efficiency)", efficiency * 100.0),
    )
}

fn explore<R: Rng + ?Sized>(state: &mut StateVector, rng: &mut R) -> ActionOutcome {
    let action = Action::Explore;
    if state.stamina <= EXPLORE_MIN_STAMINA {
        return ActionOutcome::nothing(action, "too exhausted to explore");
    }

    state.stamina -= EXPLORE_STAMINA_COST;

    if !rng.gen_bool(EXPLORE_FIND_CHANCE) {
        return ActionOutcome::applied(action, 0.0, "Explored but found nothing");
    }

    // EXPLORE_FINDS is non-empty
    let kind = *EXPLORE_FINDS.choose(rng).unwrap_or(&ResourceKind::Materials);
    let amount: u32 = rng.gen_range(1..=3);
    state.inventory.add(kind, amount);

    ActionOutcome::applied(
        action,
        EXPLORE_REWARD,
        format!("Discovered {} {}", amount, kind),
    )
}

fn first_aid(state: &mut StateVector) -> ActionOutcome {
    let action = Action::FirstAid;
    if state.health >= FIRST_AID_MAX_HEALTH {
        return ActionOutcome::nothing(action, "not hurt enough to need first aid");
    }
    if !state.inventory.take(ResourceKind::Medicine, 1) {
        return ActionOutcome::nothing(action, "no medicine");
    }

    state.health = (state.health + FIRST_AID_HEAL).min(VITAL_MAX);

    ActionOutcome::applied(action, FIRST_AID_REWARD, "Applied first aid")
}

fn consult(
    action: Action,
    state: &mut StateVector,
    advisor: Option<&mut dyn Advisor>,
) -> ActionOutcome {
    let query = action.advisory_query().unwrap_or_default();

    let Some(advisor) = advisor else {
        tracing::warn!(
            "Advisory action '{}' issued with no advisor: {}",
            query,
            SimError::AdvisoryUnavailable
        );
        return ActionOutcome {
            action,
            category: ActionCategory::Advisory,
            reward: ADVISORY_UNAVAILABLE_REWARD,
            applied: false,
            message: "Advisory system not available".into(),
            advisory_response: None,
        };
    };

    let advice = advisor.advise(query);
    if advice.is_emergency {
        state.advisory_active = true;
    }

    ActionOutcome {
        action,
        category: ActionCategory::Advisory,
        reward: ADVISORY_REWARD,
        applied: true,
        message: format!("Consulted advisory: {}", query),
        advisory_response: Some(advice.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::Advice;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn stocked_state() -> StateVector {
        let mut state = StateVector::baseline();
        state.inventory.set(ResourceKind::Food, 2);
        state.inventory.set(ResourceKind::Water, 3);
        state.inventory.set(ResourceKind::Materials, 4);
        state.inventory.set(ResourceKind::Medicine, 1);
        state
    }

    #[test]
    fn test_seek_water() {
        let mut state = stocked_state();
        let outcome = resolve_action(Action::SeekWater, &mut state, None, &mut rng());

        assert!(outcome.applied);
        assert_eq!(outcome.reward, 0.2);
        assert!(state.hydration >= 60.0 && state.hydration <= 80.0);
        assert_eq!(state.inventory.get(ResourceKind::Water), 4);
        assert_eq!(state.stamina, 65.0);
    }

    #[test]
    fn test_seek_water_requires_stamina() {
        let mut state = stocked_state();
        state.stamina = 15.0;
        let before = state.clone();

        let outcome = resolve_action(Action::SeekWater, &mut state, None, &mut rng());

        assert!(!outcome.applied);
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_forage_stamina_cost_by_branch() {
        let mut successes = 0;
        let mut failures = 0;
        let mut rng = rng();

        for _ in 0..200 {
            let mut state = stocked_state();
            let outcome = resolve_action(Action::Forage, &mut state, None, &mut rng);
            if outcome.reward > 0.0 {
                successes += 1;
                assert_eq!(outcome.reward, 0.3);
                assert_eq!(state.stamina, 55.0);
                assert_eq!(state.inventory.get(ResourceKind::Food), 3);
                assert!(state.hunger >= 15.0 && state.hunger <= 35.0);
            } else {
                failures += 1;
                assert_eq!(outcome.reward, -0.1);
                assert_eq!(state.stamina, 45.0);
                assert_eq!(state.inventory.get(ResourceKind::Food), 2);
                assert_eq!(state.hunger, 50.0);
            }
        }

        assert!(successes > 0 && failures > 0);
    }

    #[test]
    fn test_forage_requires_stamina() {
        let mut state = stocked_state();
        state.stamina = 25.0;
        let before = state.clone();

        let outcome = resolve_action(Action::Forage, &mut state, None, &mut rng());

        assert!(!outcome.applied);
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_make_fire() {
        let mut state = stocked_state();
        state.health = 70.0;
        state.temperature = 39.5;

        let outcome = resolve_action(Action::MakeFire, &mut state, None, &mut rng());

        assert_eq!(outcome.reward, 0.15);
        assert_eq!(state.inventory.get(ResourceKind::Materials), 3);
        assert_eq!(state.temperature, 40.0);
        assert_eq!(state.health, 80.0);
    }

    #[test]
    fn test_make_fire_without_materials() {
        let mut state = stocked_state();
        state.inventory.set(ResourceKind::Materials, 0);
        let before = state.clone();

        let outcome = resolve_action(Action::MakeFire, &mut state, None, &mut rng());

        assert_eq!(outcome.reward, 0.0);
        assert!(outcome.message.starts_with("Nothing happens"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_build_shelter() {
        let mut state = stocked_state();
        state.health = 50.0;

        let outcome = resolve_action(Action::BuildShelter, &mut state, None, &mut rng());

        assert_eq!(outcome.reward, 0.25);
        assert_eq!(state.inventory.get(ResourceKind::Materials), 1);
        assert_eq!(state.health, 70.0);
        assert_eq!(state.stamina, 50.0);
    }

    #[test]
    fn test_build_shelter_short_on_materials() {
        let mut state = stocked_state();
        state.inventory.set(ResourceKind::Materials, 2);
        state.health = 50.0;
        let before = state.clone();

        let outcome = resolve_action(Action::BuildShelter, &mut state, None, &mut rng());

        assert!(!outcome.applied);
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_rest_scales_with_hydration() {
        let mut state = stocked_state();
        state.health = 50.0;
        state.stamina = 20.0;
        state.hydration = 50.0;

        let outcome = resolve_action(Action::Rest, &mut state, None, &mut rng());

        assert_eq!(outcome.reward, 0.1);
        assert_eq!(state.health, 60.0);
        assert_eq!(state.stamina, 40.0);
        assert_eq!(state.hunger, 60.0);
    }

    #[test]
    fn test_rest_while_dehydrated() {
        let mut state = stocked_state();
        state.health = 50.0;
        state.stamina = 20.0;
        state.hydration = 0.0;

        let outcome = resolve_action(Action::Rest, &mut state, None, &mut rng());

        assert_eq!(outcome.reward, 0.1);
        assert_eq!(state.health, 50.0);
        assert_eq!(state.stamina, 20.0);
        assert_eq!(state.hunger, 60.0);
    }

    #[test]
    fn test_rest_hunger_left_unclamped() {
        let mut state = stocked_state();
        state.hunger = 95.0;

        resolve_action(Action::Rest, &mut state, None, &mut rng());

        assert_eq!(state.hunger, 105.0);
    }

    #[test]
    fn test_explore() {
        let mut rng = rng();
        let mut found_any = false;

        for _ in 0..50 {
            let mut state = stocked_state();
            let before_total = state.inventory.total();
            let outcome = resolve_action(Action::Explore, &mut state, None, &mut rng);

            assert_eq!(state.stamina, 55.0);
            assert_eq!(state.inventory.get(ResourceKind::Water), 3);
            let gained = state.inventory.total() - before_total;
            if outcome.reward > 0.0 {
                found_any = true;
                assert_eq!(outcome.reward, 0.15);
                assert!((1..=3).contains(&gained));
            } else {
                assert_eq!(gained, 0);
            }
        }

        assert!(found_any);
    }

    #[test]
    fn test_explore_requires_stamina() {
        let mut state = stocked_state();
        state.stamina = 20.0;
        let before = state.clone();

        let outcome = resolve_action(Action::Explore, &mut state, None, &mut rng());

        assert!(!outcome.applied);
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_first_aid_preconditions() {
        let mut state = stocked_state();
        state.health = 95.0;
        let outcome = resolve_action(Action::FirstAid, &mut state, None, &mut rng());
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(state.inventory.get(ResourceKind::Medicine), 1);

        state.health = 60.0;
        let outcome = resolve_action(Action::FirstAid, &mut state, None, &mut rng());
        assert_eq!(outcome.reward, 0.2);
        assert_eq!(state.health, 85.0);
        assert_eq!(state.inventory.get(ResourceKind::Medicine), 0);

        state.health = 40.0;
        let outcome = resolve_action(Action::FirstAid, &mut state, None, &mut rng());
        assert_eq!(outcome.reward, 0.0);
        assert_eq!(state.health, 40.0);
    }

    #[test]
    fn test_idle_ids_do_nothing() {
        let mut state = stocked_state();
        let before = state.clone();

        let outcome = resolve_action(Action::Idle(9), &mut state, None, &mut rng());

        assert_eq!(outcome.reward, 0.0);
        assert_eq!(outcome.category, ActionCategory::Survival);
        assert_eq!(state, before);
    }

    #[test]
    fn test_advisory_with_advisor() {
        let mut state = stocked_state();
        let mut queries = Vec::new();
        let mut advisor = |query: &str| {
            queries.push(query.to_string());
            Advice::new("press hard", query.contains("bleeding"))
        };

        let outcome =
            resolve_action(Action::AskWater, &mut state, Some(&mut advisor), &mut rng());
        assert_eq!(outcome.reward, 0.05);
        assert_eq!(outcome.advisory_response.as_deref(), Some("press hard"));
        assert!(!state.advisory_active);

        let outcome =
            resolve_action(Action::AskBleeding, &mut state, Some(&mut advisor), &mut rng());
        assert_eq!(outcome.category, ActionCategory::Advisory);
        assert!(state.advisory_active);

        assert_eq!(queries, ["how to find water in the wild", "bleeding wound first aid"]);
    }

    #[test]
    fn test_advisory_unavailable() {
        let mut state = stocked_state();
        let before = state.clone();

        let outcome = resolve_action(Action::AskHypothermia, &mut state, None, &mut rng());

        assert_eq!(outcome.reward, -0.1);
        assert!(outcome.advisory_response.is_none());
        assert_eq!(state, before);
    }
}
