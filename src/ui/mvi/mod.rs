//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! key / tick / fact completion ──→ Intent ──→ Reducer ──→ State ──→ draw
//!              ↑                                                   │
//!              └───────────────────────────────────────────────────┘
//! ```
//!
//! Side effects (spawning a fact lookup, touching the terminal) stay in
//! `App` and the runtime; reducers only compute the next state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
