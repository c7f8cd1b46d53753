//! Tests for input/input_state

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[test]
fn test_new_input_is_blank() {
    let input = InputState::new();
    assert_eq!(input.value(), "");
    assert!(input.is_blank());
}

#[test]
fn test_typing_changes_value() {
    let mut input = InputState::new();

    assert!(input.handle_key(key(KeyCode::Char('t'))));
    assert!(input.handle_key(key(KeyCode::Char('s'))));

    assert_eq!(input.value(), "ts");
}

#[test]
fn test_whitespace_only_is_blank() {
    let mut input = InputState::new();
    input.set_value("   ");
    assert!(input.is_blank());
}

#[test]
fn test_set_value_replaces_existing_text() {
    let mut input = InputState::new();
    input.set_value("goog");

    input.set_value("GOOG    Alphabet Inc.");

    assert_eq!(input.value(), "GOOG    Alphabet Inc.");
}

#[test]
fn test_clear_empties_value_from_any_cursor_position() {
    let mut input = InputState::new();
    input.set_value("AMZN");
    input.textarea.move_cursor(tui_textarea::CursorMove::Head);

    input.clear();

    assert_eq!(input.value(), "");
}

#[test]
fn test_set_value_keeps_line_breaks_on_one_line() {
    let mut input = InputState::new();

    input.set_value("ACME    Acme\nHoldings\r\nLtd");

    assert_eq!(input.textarea.lines().len(), 1);
    assert_eq!(input.value(), "ACME    Acme Holdings  Ltd");
}
