pub mod config;
pub mod error;
pub mod types;

pub use config::EnvConfig;
pub use error::{Result, SimError};
