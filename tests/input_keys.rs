//! Key bindings mapped onto app operations.

mod common;

use common::{app_with, FixedProvider};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use smart_counter::ui::fact::FactState;
use smart_counter::ui::input::{handle_key, InputAction};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

#[test]
fn arrows_and_symbols_change_the_count() {
    let mut app = app_with(FixedProvider::new("F", "C"));
    for code in [KeyCode::Up, KeyCode::Char('+'), KeyCode::Char('k')] {
        handle_key(&mut app, key(code));
    }
    assert_eq!(app.count(), 3);

    for code in [KeyCode::Down, KeyCode::Char('-')] {
        handle_key(&mut app, key(code));
    }
    assert_eq!(app.count(), 1);
    assert_eq!(app.history().len(), 5);
}

#[test]
fn reset_key_zeroes_the_count() {
    let mut app = app_with(FixedProvider::new("F", "C"));
    handle_key(&mut app, key(KeyCode::Up));
    handle_key(&mut app, key(KeyCode::Char('r')));
    assert_eq!(app.count(), 0);
}

#[tokio::test]
async fn enter_issues_a_lookup() {
    let mut app = app_with(FixedProvider::new("F", "C"));
    handle_key(&mut app, key(KeyCode::Up));

    let InputAction::FetchFact(pending) = handle_key(&mut app, key(KeyCode::Enter)) else {
        panic!("Enter should start a lookup");
    };
    assert_eq!(pending.number(), 1);
    assert!(app.fact().is_loading());

    app.complete_fact(pending.resolve().await);
    assert!(app.fact().fact().is_some());

    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.fact(), &FactState::Idle);
}

#[test]
fn c_clears_history_only() {
    let mut app = app_with(FixedProvider::new("F", "C"));
    handle_key(&mut app, key(KeyCode::Up));
    handle_key(&mut app, key(KeyCode::Char('c')));
    assert!(app.history().is_empty());
    assert_eq!(app.count(), 1);
}

#[test]
fn quit_keys() {
    let mut app = app_with(FixedProvider::new("F", "C"));
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = app_with(FixedProvider::new("F", "C"));
    handle_key(&mut app, ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn other_ctrl_chords_are_ignored() {
    let mut app = app_with(FixedProvider::new("F", "C"));
    assert!(matches!(handle_key(&mut app, ctrl('k')), InputAction::None));
    assert!(matches!(handle_key(&mut app, ctrl('r')), InputAction::None));
    assert_eq!(app.count(), 0);
    assert!(!app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let mut app = app_with(FixedProvider::new("F", "C"));
    let mut release = key(KeyCode::Up);
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert_eq!(app.count(), 0);
}
