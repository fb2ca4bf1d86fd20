//! Action definitions and catalog

use serde::{Deserialize, Serialize};

use crate::core::error::SimError;

/// Size of the discrete action space
pub const ACTION_COUNT: i64 = 16;

/// Ids at or above this are advisory actions
pub const ADVISORY_CUTOFF: i64 = 12;

/// Discrete action the agent can take in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    SeekWater,
    Forage,
    MakeFire,
    BuildShelter,
    Rest,
    Explore,
    FirstAid,
    /// Ids 7..=11 have no behaviour attached
    Idle(u8),
    AskBleeding,
    AskWater,
    AskHypothermia,
    AskPlants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCategory {
    Survival,
    Advisory,
}

impl Action {
    pub fn id(&self) -> i64 {
        match self {
            Action::SeekWater => 0,
            Action::Forage => 1,
            Action::MakeFire => 2,
            Action::BuildShelter => 3,
            Action::Rest => 4,
            Action::Explore => 5,
            Action::FirstAid => 6,
            Action::Idle(id) => i64::from(*id),
            Action::AskBleeding => 12,
            Action::AskWater => 13,
            Action::AskHypothermia => 14,
            Action::AskPlants => 15,
        }
    }

    pub fn category(&self) -> ActionCategory {
        if self.id() >= ADVISORY_CUTOFF {
            ActionCategory::Advisory
        } else {
            ActionCategory::Survival
        }
    }

    /// Canned query forwarded to the advisor, for advisory actions
    pub fn advisory_query(&self) -> Option<&'static str> {
        match self {
            Action::AskBleeding => Some("bleeding wound first aid"),
            Action::AskWater => Some("how to find water in the wild"),
            Action::AskHypothermia => Some("signs of hypothermia"),
            Action::AskPlants => Some("what plants are safe to eat"),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::SeekWater => "seek water",
            Action::Forage => "forage",
            Action::MakeFire => "make fire",
            Action::BuildShelter => "build shelter",
            Action::Rest => "rest",
            Action::Explore => "explore",
            Action::FirstAid => "first aid",
            Action::Idle(_) => "idle",
            Action::AskBleeding => "ask: bleeding",
            Action::AskWater => "ask: water",
            Action::AskHypothermia => "ask: hypothermia",
            Action::AskPlants => "ask: plants",
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = SimError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        let action = match id {
            0 => Action::SeekWater,
            1 => Action::Forage,
            2 => Action::MakeFire,
            3 => Action::BuildShelter,
            4 => Action::Rest,
            5 => Action::Explore,
            6 => Action::FirstAid,
            7..=11 => Action::Idle(id as u8),
            12 => Action::AskBleeding,
            13 => Action::AskWater,
            14 => Action::AskHypothermia,
            15 => Action::AskPlants,
            _ => return Err(SimError::InvalidAction(id)),
        };
        Ok(action)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
