//! Suggestions panel rendering
//!
//! Draws the panel directly below the ticker input, one row per suggestion.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::AutocompleteState;
use crate::widgets::popup;

// Panel display constants
const PANEL_BORDER_HEIGHT: u16 = 2;
const PANEL_PADDING: u16 = 4;
const PANEL_OFFSET_X: u16 = 0;
const COLUMN_SPACING: usize = 2;
const MIN_PANEL_WIDTH: usize = 20;

/// Render the suggestions panel below `input_area`
///
/// Returns the area the panel occupies so clicks can be mapped back to rows,
/// or `None` when nothing was drawn.
pub fn render_panel(
    state: &AutocompleteState,
    frame: &mut Frame,
    input_area: Rect,
    max_visible: usize,
) -> Option<Rect> {
    let suggestions = state.suggestions();
    if !state.is_visible() || suggestions.is_empty() {
        return None;
    }

    let visible_count = suggestions.len().min(max_visible.max(1));
    let panel_height = (visible_count as u16) + PANEL_BORDER_HEIGHT;

    let symbol_width = suggestions
        .iter()
        .take(visible_count)
        .map(|s| s.symbol.width())
        .max()
        .unwrap_or(0);

    let content_width = suggestions
        .iter()
        .take(visible_count)
        .map(|s| symbol_width + COLUMN_SPACING + s.display_name().width())
        .max()
        .unwrap_or(MIN_PANEL_WIDTH)
        .max(MIN_PANEL_WIDTH);
    let panel_width = (content_width.min(u16::MAX as usize) as u16).saturating_add(PANEL_PADDING);

    let panel_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        panel_width,
        panel_height,
        PANEL_OFFSET_X,
    );
    if panel_area.height <= PANEL_BORDER_HEIGHT {
        return None;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(visible_count)
        .map(|suggestion| {
            let padding = " ".repeat(symbol_width.saturating_sub(suggestion.symbol.width()));
            let line = Line::from(vec![
                Span::styled(
                    format!(" {}{}", suggestion.symbol, padding),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(COLUMN_SPACING)),
                Span::styled(suggestion.display_name(), Style::default().fg(Color::White)),
            ]);
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, panel_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, panel_area);
    Some(panel_area)
}

/// Map a clicked terminal row to a suggestion index within `panel_area`
pub fn row_at(panel_area: Rect, row: u16) -> Option<usize> {
    let first_row = panel_area.y + 1;
    let last_row = panel_area.y + panel_area.height.saturating_sub(1);
    if row >= first_row && row < last_row {
        Some((row - first_row) as usize)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
