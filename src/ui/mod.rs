//! Terminal front end: orchestrator, MVI features, rendering and the event loop.

pub mod app;
pub mod counter_display;
pub mod events;
pub mod fact;
pub mod footer;
pub mod header;
pub mod history;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
