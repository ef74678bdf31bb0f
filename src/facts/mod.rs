//! Number facts from a generative-language service.
//!
//! The orchestrator only sees [`FactProvider`]. The Gemini-backed
//! implementation swallows its own failures and answers with a
//! placeholder fact, so a provider error reaching the orchestrator
//! normally comes from a custom provider.

mod error;
mod gemini;
mod provider;

use serde::{Deserialize, Serialize};

pub use error::FactError;
pub use gemini::{GeminiClient, GeminiFactProvider, FACT_PROMPT_PREFIX, SYSTEM_INSTRUCTION};
pub use provider::{mystery_fact, unavailable_fact, FactProvider};

/// A fact about a number together with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactResult {
    pub fact: String,
    pub category: String,
}

impl FactResult {
    pub fn new(fact: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            fact: fact.into(),
            category: category.into(),
        }
    }
}
