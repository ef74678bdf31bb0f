//! Recent history panel.

mod list;

pub use list::{action_label, format_time, history_lines, render_history};
