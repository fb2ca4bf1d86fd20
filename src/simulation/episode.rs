//! Episode driver and simple policies
//!
//! Runs whole episodes against a [`SurvivalEnv`], one at a time or as an
//! independent parallel batch.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::actions::catalog::{Action, ACTION_COUNT};
use crate::advisory::Advisor;
use crate::core::config::EnvConfig;
use crate::core::error::Result;
use crate::core::types::{Day, ResourceKind, Step};
use crate::entity::state::StateVector;
use crate::simulation::env::SurvivalEnv;
use crate::simulation::observation::Observation;
use crate::simulation::termination::EpisodeEnd;

/// Chooses the next action id from the current observation and state
pub trait Policy {
    fn choose(&mut self, observation: &Observation, state: &StateVector) -> i64;

    /// Called at the start of every episode
    fn reset(&mut self) {}
}

/// Uniformly random over the whole action space
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _observation: &Observation, _state: &StateVector) -> i64 {
        self.rng.gen_range(0..ACTION_COUNT)
    }
}

/// Hand-written priority rules: treat the most urgent problem first
///
/// Consults the advisor at most once per episode, and only when medicine
/// and water cannot help.
#[derive(Debug, Default)]
pub struct HeuristicPolicy {
    asked: bool,
}

impl HeuristicPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Policy for HeuristicPolicy {
    fn choose(&mut self, _observation: &Observation, state: &StateVector) -> i64 {
        let inv = &state.inventory;

        let action = if state.health < 60.0 && inv.has(ResourceKind::Medicine, 1) {
            Action::FirstAid
        } else if state.hydration < 40.0 && state.stamina > 15.0 {
            Action::SeekWater
        } else if state.health < 30.0 && !state.advisory_active && !self.asked {
            self.asked = true;
            Action::AskBleeding
        } else if state.hunger > 60.0 && state.stamina > 25.0 {
            Action::Forage
        } else if state.stamina < 30.0 {
            Action::Rest
        } else if state.temperature < 36.0 && inv.has(ResourceKind::Materials, 1) {
            Action::MakeFire
        } else if state.health < 70.0 && inv.has(ResourceKind::Materials, 3) {
            Action::BuildShelter
        } else if state.stamina > 20.0 {
            Action::Explore
        } else {
            Action::Rest
        };

        action.id()
    }

    fn reset(&mut self) {
        self.asked = false;
    }
}

/// Outcome of one finished episode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub seed: Option<u64>,
    pub steps: Step,
    pub days: Day,
    pub total_reward: f32,
    pub final_health: f32,
    pub end: Option<EpisodeEnd>,
}

impl EpisodeSummary {
    pub fn survived(&self) -> bool {
        self.end == Some(EpisodeEnd::Survived)
    }
}

/// Reset `env` and step it with `policy` until the episode ends
pub fn run_episode(
    env: &mut SurvivalEnv,
    policy: &mut dyn Policy,
    seed: Option<u64>,
) -> Result<EpisodeSummary> {
    let (mut observation, _) = env.reset(seed);
    policy.reset();

    loop {
        let action = policy.choose(&observation, env.state());
        let result = env.step(action)?;
        observation = result.observation;

        if result.is_done() {
            return Ok(EpisodeSummary {
                seed,
                steps: env.state().step_count,
                days: env.state().day,
                total_reward: env.episode_reward(),
                final_health: env.state().health,
                end: result.info.episode_end,
            });
        }
    }
}

/// Run `episodes` independent episodes in parallel
///
/// Each episode gets its own environment, advisor and policy, seeded with
/// `base_seed + index`. Results come back in index order.
pub fn run_batch<A, P>(
    config: &EnvConfig,
    episodes: usize,
    base_seed: u64,
    make_advisor: A,
    make_policy: P,
) -> Result<Vec<EpisodeSummary>>
where
    A: Fn() -> Option<Box<dyn Advisor>> + Sync,
    P: Fn(u64) -> Box<dyn Policy> + Sync,
{
    (0..episodes)
        .into_par_iter()
        .map(|index| {
            let seed = base_seed.wrapping_add(index as u64);
            let mut env = SurvivalEnv::new(config.clone().with_seed(seed))?;
            env.set_advisor(make_advisor());
            let mut policy = make_policy(seed);
            run_episode(&mut env, policy.as_mut(), Some(seed))
        })
        .collect()
}
