//! Tests for suggestions panel rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use super::*;
use crate::search::Suggestion;

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 15;

fn render(state: &AutocompleteState, max_visible: usize) -> (String, Option<Rect>) {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut panel_area = None;
    terminal
        .draw(|f| {
            let input_area = Rect::new(0, 0, TEST_WIDTH, 3);
            panel_area = render_panel(state, f, input_area, max_visible);
        })
        .unwrap();
    (terminal.backend().to_string(), panel_area)
}

#[test]
fn test_hidden_panel_draws_nothing() {
    let mut state = AutocompleteState::default();
    state.set_suggestions(vec![Suggestion::new("AAPL", "Apple Inc.")]);
    state.hide();

    let (output, area) = render(&state, 8);

    assert!(area.is_none());
    assert!(!output.contains("AAPL"));
}

#[test]
fn test_empty_panel_draws_nothing() {
    let mut state = AutocompleteState::default();
    state.show();

    let (_, area) = render(&state, 8);

    assert!(area.is_none());
}

#[test]
fn test_panel_rows_show_symbol_and_sanitized_name() {
    let mut state = AutocompleteState::default();
    state.set_suggestions(vec![
        Suggestion::new("BOB", "Bob\\'s Company"),
        Suggestion::new("MSFT", "Microsoft Corporation"),
    ]);

    let (output, area) = render(&state, 8);

    assert!(output.contains("Suggestions"));
    assert!(output.contains("Bob's Company"));
    assert!(!output.contains("Bob\\'s"));
    assert!(output.contains("MSFT"));

    let area = area.unwrap();
    assert_eq!(area.y, 3);
    assert_eq!(area.height, 4);
}

#[test]
fn test_panel_keeps_endpoint_order() {
    let mut state = AutocompleteState::default();
    state.set_suggestions(vec![
        Suggestion::new("ZM", "Zoom Video"),
        Suggestion::new("AA", "Alcoa Corporation"),
    ]);

    let (output, _) = render(&state, 8);

    let zoom = output.find("Zoom Video").unwrap();
    let alcoa = output.find("Alcoa Corporation").unwrap();
    assert!(zoom < alcoa);
}

#[test]
fn test_panel_limits_visible_rows() {
    let mut state = AutocompleteState::default();
    state.set_suggestions(vec![
        Suggestion::new("A", "Agilent"),
        Suggestion::new("B", "Barnes"),
        Suggestion::new("C", "Citigroup"),
    ]);

    let (output, area) = render(&state, 2);

    assert!(output.contains("Agilent"));
    assert!(output.contains("Barnes"));
    assert!(!output.contains("Citigroup"));
    assert_eq!(area.unwrap().height, 4);
}

#[test]
fn test_row_at_maps_rows_inside_border() {
    let panel = Rect::new(0, 3, 30, 5);

    assert_eq!(row_at(panel, 3), None);
    assert_eq!(row_at(panel, 4), Some(0));
    assert_eq!(row_at(panel, 6), Some(2));
    assert_eq!(row_at(panel, 7), None);
}
