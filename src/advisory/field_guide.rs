//! Minimal keyword-matched field guide
//!
//! Stands in for a full first-aid knowledge base when driving the
//! simulation from the command line.

use super::{Advice, Advisor};

struct Entry {
    keywords: &'static [&'static str],
    text: &'static str,
}

const EMERGENCY_KEYWORDS: &[&str] = &[
    "bleeding",
    "unconscious",
    "not breathing",
    "hypothermia",
    "choking",
    "fracture",
    "poison",
    "burn",
];

const ENTRIES: &[Entry] = &[
    Entry {
        keywords: &["bleeding", "wound", "cut"],
        text: "Apply firm direct pressure with a clean cloth. Elevate the limb. \
               Do not remove soaked dressings, add layers on top.",
    },
    Entry {
        keywords: &["water", "thirst", "dehydration"],
        text: "Follow terrain downhill and look for green vegetation. Collect dew \
               at dawn. Boil or filter any water before drinking.",
    },
    Entry {
        keywords: &["hypothermia", "cold", "freezing"],
        text: "Watch for shivering, slurred speech and confusion. Get out of wind \
               and wet clothing, insulate from the ground, warm the core first.",
    },
    Entry {
        keywords: &["plants", "eat", "food", "forage"],
        text: "Avoid plants with milky sap, bitter almond smell or three-leaf \
               patterns. When unsure, do not eat it.",
    },
];

const FALLBACK: &str = "Stay calm, stay sheltered, conserve energy and signal for help.";

/// Keyword table advisor with a log of every query it has answered
#[derive(Debug, Default)]
pub struct FieldGuide {
    history: Vec<String>,
}

impl FieldGuide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queries answered so far, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn is_emergency(query: &str) -> bool {
        EMERGENCY_KEYWORDS.iter().any(|k| query.contains(k))
    }
}

impl Advisor for FieldGuide {
    fn advise(&mut self, query: &str) -> Advice {
        let query = query.to_lowercase();
        self.history.push(query.clone());

        let text = ENTRIES
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| query.contains(k)))
            .map(|entry| entry.text)
            .unwrap_or(FALLBACK);

        Advice::new(text, Self::is_emergency(&query))
    }
}
