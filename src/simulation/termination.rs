//! Episode termination rules

use serde::{Deserialize, Serialize};

use crate::core::types::Day;
use crate::entity::state::StateVector;

/// Day on which the agent counts as rescued
pub const SURVIVAL_GOAL_DAY: Day = 30;

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeEnd {
    Died,
    OutOfSteps,
    Survived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Termination {
    pub terminated: bool,
    pub truncated: bool,
    pub end: Option<EpisodeEnd>,
}

impl Termination {
    fn ended(end: EpisodeEnd) -> Self {
        Self {
            terminated: end != EpisodeEnd::OutOfSteps,
            truncated: end == EpisodeEnd::OutOfSteps,
            end: Some(end),
        }
    }

    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Decide whether the episode is over
///
/// First match wins: death, then step budget, then survival goal.
pub fn check_termination(state: &StateVector, max_steps: u32) -> Termination {
    if !state.is_alive() {
        Termination::ended(EpisodeEnd::Died)
    } else if state.step_count >= u64::from(max_steps) {
        Termination::ended(EpisodeEnd::OutOfSteps)
    } else if state.day >= SURVIVAL_GOAL_DAY {
        Termination::ended(EpisodeEnd::Survived)
    } else {
        Termination::default()
    }
}
