//! Fact card feature module.
//!
//! Tracks the single outstanding fact request and what the card shows.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Request state enum
//! - `intent.rs` - Request lifecycle actions
//! - `reducer.rs` - State transitions, including stale-completion checks
//! - `card.rs` - Rendering

mod card;
mod intent;
mod reducer;
mod state;

pub use card::{card_height, render_fact_card};
pub use intent::FactIntent;
pub use reducer::FactReducer;
pub use state::{FactState, FACT_ERROR_MESSAGE};
