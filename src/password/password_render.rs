use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::PasswordField;
use crate::input::render_field;

/// Columns taken by the toggle button, borders included
pub const TOGGLE_BUTTON_WIDTH: u16 = 6;

/// Draw the password field with its toggle button to the right
///
/// Returns `(field_area, toggle_area)` for click hit-testing.
pub fn render_password_group(
    field: &mut PasswordField,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) -> (Rect, Rect) {
    let [field_area, toggle_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(TOGGLE_BUTTON_WIDTH)])
            .areas(area);

    render_field(&mut field.textarea, "Password", focused, frame, field_area);

    let button = Paragraph::new(field.icon())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(button, toggle_area);

    (field_area, toggle_area)
}

#[cfg(test)]
#[path = "password_render_tests.rs"]
mod password_render_tests;
