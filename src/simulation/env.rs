//! Step-based survival environment
//!
//! Owns the agent state and RNG for one episode at a time and wires
//! action resolution, environment dynamics, reward and termination together.

use std::fmt::Write as _;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::actions::catalog::{Action, ActionCategory, ACTION_COUNT};
use crate::actions::resolver::{resolve_action, ActionOutcome};
use crate::advisory::Advisor;
use crate::core::config::EnvConfig;
use crate::core::error::Result;
use crate::core::types::{Day, Step};
use crate::entity::inventory::InventorySnapshot;
use crate::entity::state::{StateVector, STEPS_PER_DAY};
use crate::simulation::dynamics::apply_environment;
use crate::simulation::observation::Observation;
use crate::simulation::reward::base_reward;
use crate::simulation::termination::{check_termination, EpisodeEnd};

/// Info returned alongside the first observation of an episode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetInfo {
    pub day: Day,
    pub health: f32,
    pub inventory: InventorySnapshot,
    pub advisory_available: bool,
}

/// Per-step info record: state snapshot plus what the action did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepInfo {
    pub step: Step,
    pub day: Day,
    pub health: f32,
    pub hunger: f32,
    pub hydration: f32,
    pub stamina: f32,
    pub temperature: f32,
    pub inventory: InventorySnapshot,
    pub injuries: usize,
    pub advisory_active: bool,
    pub advisory_available: bool,
    pub action: Action,
    pub category: ActionCategory,
    pub action_reward: f32,
    pub message: String,
    pub advisory_response: Option<String>,
    pub episode_end: Option<EpisodeEnd>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

impl StepResult {
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Survival environment
pub struct SurvivalEnv {
    config: EnvConfig,
    state: StateVector,
    rng: ChaCha8Rng,
    advisor: Option<Box<dyn Advisor>>,
    episode_reward: f32,
}

impl SurvivalEnv {
    /// Create an environment without an advisor
    ///
    /// The state is initialized as if `reset` had been called with the
    /// configured seed.
    pub fn new(config: EnvConfig) -> Result<Self> {
        let config = config.clamped();
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let state = StateVector::initial(&mut rng);

        Ok(Self {
            config,
            state,
            rng,
            advisor: None,
            episode_reward: 0.0,
        })
    }

    pub fn with_advisor(mut self, advisor: impl Advisor + 'static) -> Self {
        self.advisor = Some(Box::new(advisor));
        self
    }

    pub fn set_advisor(&mut self, advisor: Option<Box<dyn Advisor>>) {
        self.advisor = advisor;
    }

    pub fn advisory_available(&self) -> bool {
        self.advisor.is_some()
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Direct access to the state, for setting up scenarios
    pub fn state_mut(&mut self) -> &mut StateVector {
        &mut self.state
    }

    pub fn action_space_size(&self) -> i64 {
        ACTION_COUNT
    }

    /// Sum of step rewards since the last reset
    pub fn episode_reward(&self) -> f32 {
        self.episode_reward
    }

    /// Start a new episode, reseeding the RNG if `seed` is given
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, ResetInfo) {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        self.state = StateVector::initial(&mut self.rng);
        self.episode_reward = 0.0;

        tracing::debug!(
            "Episode reset (seed: {:?}, inventory: {})",
            seed,
            self.state.inventory.snapshot()
        );

        let info = ResetInfo {
            day: self.state.day,
            health: self.state.health,
            inventory: self.state.inventory.snapshot(),
            advisory_available: self.advisory_available(),
        };
        (self.get_observation(), info)
    }

    /// Advance the episode by one action
    ///
    /// Out-of-range ids are rejected before the state is touched.
    pub fn step(&mut self, action_id: i64) -> Result<StepResult> {
        let action = Action::try_from(action_id)?;

        self.state.step_count += 1;

        let advisor = self.advisor.as_mut().map(|a| &mut **a as &mut dyn Advisor);
        let outcome = resolve_action(action, &mut self.state, advisor, &mut self.rng);

        apply_environment(&mut self.state, self.config.difficulty, &mut self.rng);

        let reward = outcome.reward + base_reward(&self.state);
        self.episode_reward += reward;

        let termination = check_termination(&self.state, self.config.max_steps);

        if self.state.step_count % STEPS_PER_DAY == 0 {
            self.state.day += 1;
            tracing::debug!("Day {} begins", self.state.day);
        }

        tracing::debug!(
            "Step {}: {} -> reward {:.3} (health {:.1}, hunger {:.1}, hydration {:.1})",
            self.state.step_count,
            action,
            reward,
            self.state.health,
            self.state.hunger,
            self.state.hydration
        );

        if let Some(end) = termination.end {
            tracing::info!(
                "Episode ended ({:?}) at step {}, day {}, total reward {:.2}",
                end,
                self.state.step_count,
                self.state.day,
                self.episode_reward
            );
        }

        Ok(StepResult {
            observation: self.get_observation(),
            reward,
            terminated: termination.terminated,
            truncated: termination.truncated,
            info: self.step_info(outcome, termination.end),
        })
    }

    /// Current observation without advancing the episode
    pub fn get_observation(&self) -> Observation {
        Observation::encode(&self.state)
    }

    /// Human-readable status block
    pub fn render(&self) -> String {
        let state = &self.state;
        let mut out = String::new();

        let _ = writeln!(out, "--- Day {} (step {}) ---", state.day, state.step_count);
        let _ = writeln!(
            out,
            "Health {:5.1} | Hunger {:5.1} | Hydration {:5.1} | Stamina {:5.1}",
            state.health, state.hunger, state.hydration, state.stamina
        );
        let _ = writeln!(out, "Temperature {:.1}°C", state.temperature);
        let _ = writeln!(out, "Inventory: {}", state.inventory.snapshot());
        let _ = writeln!(out, "Injuries: {}", state.injury_count());
        let _ = writeln!(
            out,
            "Advisory: {}{}",
            if self.advisory_available() { "available" } else { "unavailable" },
            if state.advisory_active { " (emergency consulted)" } else { "" }
        );

        out
    }

    fn step_info(&self, outcome: ActionOutcome, episode_end: Option<EpisodeEnd>) -> StepInfo {
        let state = &self.state;
        StepInfo {
            step: state.step_count,
            day: state.day,
            health: state.health,
            hunger: state.hunger,
            hydration: state.hydration,
            stamina: state.stamina,
            temperature: state.temperature,
            inventory: state.inventory.snapshot(),
            injuries: state.injury_count(),
            advisory_active: state.advisory_active,
            advisory_available: self.advisory_available(),
            action: outcome.action,
            category: outcome.category,
            action_reward: outcome.reward,
            message: outcome.message,
            advisory_response: outcome.advisory_response,
            episode_end,
        }
    }
}

impl std::fmt::Debug for SurvivalEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurvivalEnv")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("advisory_available", &self.advisory_available())
            .finish()
    }
}
