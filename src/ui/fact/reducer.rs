//! Reducer for the fact card.

use crate::ui::mvi::Reducer;

use super::intent::FactIntent;
use super::state::FactState;

pub struct FactReducer;

impl Reducer for FactReducer {
    type State = FactState;
    type Intent = FactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Replaces whatever was shown, including an older Loading.
            FactIntent::Request { request_id, number } => FactState::Loading {
                request_id,
                number,
                animation_tick: 0,
            },

            FactIntent::Resolved { request_id, fact } => match state {
                FactState::Loading {
                    request_id: pending,
                    number,
                    ..
                } if pending == request_id => FactState::Success { number, fact },
                other => other,
            },

            FactIntent::Failed {
                request_id,
                message,
            } => match state {
                FactState::Loading {
                    request_id: pending,
                    number,
                    ..
                } if pending == request_id => FactState::Failure { number, message },
                other => other,
            },

            FactIntent::AnimationTick => match state {
                FactState::Loading {
                    request_id,
                    number,
                    animation_tick,
                } => FactState::Loading {
                    request_id,
                    number,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            FactIntent::Dismiss => FactState::Idle,
        }
    }
}
