//! Advisory collaborator
//!
//! The simulation consults an [`Advisor`] as one of its actions. It only
//! forwards the returned text and reads the emergency flag.

pub mod field_guide;

pub use field_guide::FieldGuide;

use serde::{Deserialize, Serialize};

/// Response to a single advisory query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub text: String,
    pub is_emergency: bool,
}

impl Advice {
    pub fn new(text: impl Into<String>, is_emergency: bool) -> Self {
        Self {
            text: text.into(),
            is_emergency,
        }
    }
}

/// Anything that can answer a free-text advisory query
pub trait Advisor: Send {
    fn advise(&mut self, query: &str) -> Advice;
}

impl<F> Advisor for F
where
    F: FnMut(&str) -> Advice + Send,
{
    fn advise(&mut self, query: &str) -> Advice {
        self(query)
    }
}
