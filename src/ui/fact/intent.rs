//! Intents for the fact card.

use crate::facts::FactResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FactIntent {
    /// A new request was issued for `number`.
    Request { request_id: u64, number: i64 },

    /// The provider answered.
    Resolved { request_id: u64, fact: FactResult },

    /// The provider failed.
    Failed { request_id: u64, message: String },

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// Hide the card and forget any outstanding request.
    Dismiss,
}

impl Intent for FactIntent {}
