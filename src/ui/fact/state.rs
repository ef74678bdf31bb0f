//! State for the fact card.

use crate::facts::FactResult;
use crate::ui::mvi::UiState;

/// Message shown when the provider fails.
pub const FACT_ERROR_MESSAGE: &str = "Failed to connect to Gemini. Try again later.";

/// State of the fact request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FactState {
    /// Nothing requested or the card was dismissed.
    #[default]
    Idle,

    /// Waiting for the provider.
    Loading {
        /// Identifies the request a completion must match.
        request_id: u64,
        number: i64,
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    Success { number: i64, fact: FactResult },

    Failure { number: i64, message: String },
}

impl UiState for FactState {}

impl FactState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Id of the request in flight, if any.
    pub fn pending_request(&self) -> Option<u64> {
        match self {
            Self::Loading { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    pub fn fact(&self) -> Option<&FactResult> {
        match self {
            Self::Success { fact, .. } => Some(fact),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The number the card is about.
    pub fn number(&self) -> Option<i64> {
        match self {
            Self::Idle => None,
            Self::Loading { number, .. }
            | Self::Success { number, .. }
            | Self::Failure { number, .. } => Some(*number),
        }
    }
}
