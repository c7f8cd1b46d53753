//! Tests for app_events

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use proptest::prelude::*;

use crate::app::{EMPTY_TICKER_MESSAGE, Focus};
use crate::layout::LayoutRegions;
use crate::search::Suggestion;
use crate::test_utils::test_helpers::{connected_app, key, key_with_mods, test_app};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn type_text(app: &mut crate::app::App, text: &str, now: Instant) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)), now);
    }
}

#[test]
fn test_typing_schedules_single_search() {
    let (mut app, mut request_rx, _response_tx) = connected_app();
    let start = Instant::now();

    app.handle_key_event(key(KeyCode::Char('a')), start);
    app.handle_key_event(key(KeyCode::Char('m')), start + ms(100));
    app.handle_key_event(key(KeyCode::Char('z')), start + ms(200));

    app.tick(start + ms(450));
    assert!(request_rx.try_recv().is_err());

    app.tick(start + ms(500));
    let request = request_rx.try_recv().unwrap();
    assert_eq!(request.query, "amz");
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_deleting_to_empty_hides_panel() {
    let (mut app, mut request_rx, _response_tx) = connected_app();
    let start = Instant::now();
    type_text(&mut app, "a", start);
    app.autocomplete
        .set_suggestions(vec![Suggestion::new("A", "Agilent Technologies")]);

    app.handle_key_event(key(KeyCode::Backspace), start + ms(50));
    app.tick(start + ms(1000));

    assert!(!app.autocomplete.is_visible());
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_cursor_movement_does_not_search() {
    let (mut app, mut request_rx, _response_tx) = connected_app();
    let start = Instant::now();
    type_text(&mut app, "ge", start);
    app.tick(start + ms(300));
    let _ = request_rx.try_recv();

    app.handle_key_event(key(KeyCode::Left), start + ms(400));
    app.tick(start + ms(1000));

    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_enter_with_empty_ticker_shows_alert() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Enter), Instant::now());

    assert_eq!(app.alert.message(), Some(EMPTY_TICKER_MESSAGE));
    assert!(!app.should_quit());
}

#[test]
fn test_alert_blocks_other_keys_until_dismissed() {
    let mut app = test_app();
    let now = Instant::now();
    app.handle_key_event(key(KeyCode::Enter), now);

    app.handle_key_event(key(KeyCode::Char('x')), now);
    assert_eq!(app.ticker(), "");
    assert!(app.alert.is_visible());

    app.handle_key_event(key(KeyCode::Enter), now);
    assert!(!app.alert.is_visible());
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::Char('x')), now);
    assert_eq!(app.ticker(), "x");
}

#[test]
fn test_alert_dismissed_with_esc_does_not_quit() {
    let mut app = test_app();
    let now = Instant::now();
    app.handle_key_event(key(KeyCode::Enter), now);

    app.handle_key_event(key(KeyCode::Esc), now);

    assert!(!app.alert.is_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_alert_blocks_mouse_clicks() {
    let mut app = test_app();
    app.layout_regions = LayoutRegions {
        password_toggle: Some(ratatui::layout::Rect::new(34, 4, 6, 3)),
        ..LayoutRegions::default()
    };
    app.alert.show(EMPTY_TICKER_MESSAGE);

    app.handle_event(left_click(36, 5), Instant::now());

    assert!(app.password.is_masked());
}

#[test]
fn test_enter_with_ticker_submits() {
    let mut app = test_app();
    let now = Instant::now();
    type_text(&mut app, "NVDA", now);

    app.handle_key_event(key(KeyCode::Enter), now);

    assert!(app.should_quit());
    assert_eq!(app.output.as_deref(), Some("NVDA"));
}

#[test]
fn test_esc_hides_panel_then_quits() {
    let mut app = test_app();
    let now = Instant::now();
    app.autocomplete
        .set_suggestions(vec![Suggestion::new("NVDA", "NVIDIA Corporation")]);

    app.handle_key_event(key(KeyCode::Esc), now);
    assert!(!app.autocomplete.is_visible());
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::Esc), now);
    assert!(app.should_quit());
    assert!(app.output.is_none());
}

#[test]
fn test_esc_quits_after_click_on_input_before_results() {
    let mut app = test_app();
    let now = Instant::now();
    app.layout_regions = LayoutRegions {
        ticker_input: Some(ratatui::layout::Rect::new(0, 1, 80, 3)),
        ..LayoutRegions::default()
    };
    type_text(&mut app, "A", now);

    app.handle_event(left_click(5, 2), now);
    assert!(!app.autocomplete.is_visible());

    app.handle_key_event(key(KeyCode::Esc), now);
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_without_output() {
    let mut app = test_app();
    let now = Instant::now();
    type_text(&mut app, "IBM", now);

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL), now);

    assert!(app.should_quit());
    assert!(app.output.is_none());
}

#[test]
fn test_tab_moves_focus_to_password() {
    let mut app = test_app();
    let now = Instant::now();

    app.handle_key_event(key(KeyCode::Tab), now);
    type_text(&mut app, "pw", now);

    assert_eq!(app.focus, Focus::Password);
    assert_eq!(app.password.value(), "pw");
    assert_eq!(app.ticker(), "");
}

#[test]
fn test_ctrl_t_toggles_password_visibility() {
    let mut app = test_app();
    let now = Instant::now();
    app.handle_key_event(key(KeyCode::Tab), now);

    app.handle_key_event(key_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL), now);
    assert!(!app.password.is_masked());

    app.handle_key_event(key_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL), now);
    assert!(app.password.is_masked());
    assert_eq!(app.password.value(), "");
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = test_app();
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    release.state = KeyEventState::NONE;

    app.handle_event(Event::Key(release), Instant::now());

    assert_eq!(app.ticker(), "");
}

#[test]
fn test_paste_into_ticker_schedules_search() {
    let (mut app, mut request_rx, _response_tx) = connected_app();
    let start = Instant::now();

    app.handle_event(Event::Paste("brk\n".to_string()), start);
    app.tick(start + ms(300));

    assert_eq!(app.ticker(), "brk ");
    assert_eq!(request_rx.try_recv().unwrap().query, "brk");
}

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// Typing any text and submitting succeeds exactly when the text has a non-space character
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_submit_blocked_iff_blank(text in "[a-zA-Z ]{0,12}") {
        let mut app = test_app();
        let now = Instant::now();
        type_text(&mut app, &text, now);

        app.handle_key_event(key(KeyCode::Enter), now);

        let blank = text.trim().is_empty();
        prop_assert_eq!(app.alert.is_visible(), blank);
        prop_assert_eq!(app.should_quit(), !blank);
    }
}
