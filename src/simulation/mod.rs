pub mod dynamics;
pub mod env;
pub mod episode;
pub mod observation;
pub mod reward;
pub mod termination;

pub use env::{ResetInfo, StepInfo, StepResult, SurvivalEnv};
pub use episode::{run_batch, run_episode, EpisodeSummary, HeuristicPolicy, Policy, RandomPolicy};
pub use observation::Observation;
pub use termination::{EpisodeEnd, Termination};
