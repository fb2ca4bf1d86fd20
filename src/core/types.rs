//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation step counter within an episode
pub type Step = u64;

/// In-world day counter, starts at 1
pub type Day = u32;

/// Kinds of resource the agent can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    Food,
    Water,
    Materials,
    Medicine,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Food,
        ResourceKind::Water,
        ResourceKind::Materials,
        ResourceKind::Medicine,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Water => "water",
            Self::Materials => "materials",
            Self::Medicine => "medicine",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
