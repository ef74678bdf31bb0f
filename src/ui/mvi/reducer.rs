//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// Every state transition of a feature goes through its reducer,
/// which must stay a pure `(State, Intent) -> State` function.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Consume the current state and an intent, returning the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
