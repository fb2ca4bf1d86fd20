pub mod catalog;
pub mod resolver;

pub use catalog::{Action, ActionCategory, ACTION_COUNT};
pub use resolver::{resolve_action, ActionOutcome};
