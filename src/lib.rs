//! Smart Counter: a terminal counter that can ask Gemini for a fact
//! about the current number.

pub mod config;
pub mod counter;
pub mod facts;
pub mod history;
pub mod logging;
pub mod ui;
