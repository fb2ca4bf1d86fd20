//! Environment configuration
//!
//! Construction-time knobs for a [`SurvivalEnv`](crate::simulation::env::SurvivalEnv).
//! Per-action yields and costs are constants next to the code that applies them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Lowest accepted difficulty; smaller values are raised to this
pub const MIN_DIFFICULTY: f32 = 0.1;

/// Configuration for one survival environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Step budget before an episode is truncated
    pub max_steps: u32,

    /// Multiplier on per-step hunger and hydration decay
    ///
    /// At 1.0 hunger rises 2.0 and hydration falls 1.5 per step.
    pub difficulty: f32,

    /// Seed for the environment RNG; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_steps: 500,
            difficulty: 1.0,
            seed: None,
        }
    }
}

impl EnvConfig {
    /// Create a config, raising `difficulty` to [`MIN_DIFFICULTY`] if needed
    pub fn new(max_steps: u32, difficulty: f32) -> Self {
        Self {
            max_steps,
            difficulty,
            seed: None,
        }
        .clamped()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Apply the difficulty floor
    pub fn clamped(mut self) -> Self {
        if self.difficulty < MIN_DIFFICULTY {
            self.difficulty = MIN_DIFFICULTY;
        }
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(SimError::Config("max_steps must be positive".into()));
        }
        if !self.difficulty.is_finite() {
            return Err(SimError::Config(format!(
                "difficulty must be finite, got {}",
                self.difficulty
            )));
        }
        Ok(())
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EnvConfig = toml::from_str(content)?;
        let config = config.clamped();
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}
