//! Inventory - resources carried by the agent

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ResourceKind;

/// Counts of carried resources
///
/// Kinds never stored read as zero.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    counts: AHashMap<ResourceKind, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current amount of a resource
    pub fn get(&self, kind: ResourceKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Overwrite the amount of a resource
    pub fn set(&mut self, kind: ResourceKind, amount: u32) {
        self.counts.insert(kind, amount);
    }

    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        let entry = self.counts.entry(kind).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Remove exactly `amount`, returns false and leaves counts untouched if short
    pub fn take(&mut self, kind: ResourceKind, amount: u32) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count >= amount => {
                *count -= amount;
                true
            }
            _ => amount == 0,
        }
    }

    pub fn has(&self, kind: ResourceKind, amount: u32) -> bool {
        self.get(kind) >= amount
    }

    /// Sum of all resource counts
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            food: self.get(ResourceKind::Food),
            water: self.get(ResourceKind::Water),
            materials: self.get(ResourceKind::Materials),
            medicine: self.get(ResourceKind::Medicine),
        }
    }
}

impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        ResourceKind::ALL
            .iter()
            .all(|kind| self.get(*kind) == other.get(*kind))
    }
}

impl Eq for Inventory {}

/// Fixed-field copy of an inventory for info records and display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub food: u32,
    pub water: u32,
    pub materials: u32,
    pub medicine: u32,
}

impl InventorySnapshot {
    pub fn total(&self) -> u32 {
        self.food + self.water + self.materials + self.medicine
    }
}

impl std::fmt::Display for InventorySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "food {} | water {} | materials {} | medicine {}",
            self.food, self.water, self.materials, self.medicine
        )
    }
}
