use crate::ui::app::{App, PendingFact};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Follow-up work the runtime must do after a key press.
#[derive(Debug)]
pub enum InputAction {
    /// Handled entirely inside the app.
    None,
    /// A fact lookup was issued and must be driven to completion.
    FetchFact(PendingFact),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') => {
            app.increment();
        }
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('j') => {
            app.decrement();
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('0') => {
            app.reset();
        }
        KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('A') => {
            return InputAction::FetchFact(app.ask());
        }
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => {
            app.dismiss();
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.clear_history();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.request_quit();
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
