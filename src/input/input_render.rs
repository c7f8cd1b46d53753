use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Draw a form field, highlighting its border and showing the cursor when focused
pub fn render_field(
    textarea: &mut TextArea<'static>,
    title: &str,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(border_color)),
    );

    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    textarea.set_cursor_style(cursor_style);

    frame.render_widget(&*textarea, area);
}
