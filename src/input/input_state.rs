use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Single-line textarea with a titled border
pub fn field_textarea(title: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    textarea.set_cursor_line_style(Style::default());
    textarea
}

/// The ticker input field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: field_textarea("Ticker"),
        }
    }

    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_blank(&self) -> bool {
        self.value().trim().is_empty()
    }

    /// Feed a key to the textarea. Returns true if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Replace the whole value; the cursor ends up after the new text
    ///
    /// Line breaks become spaces so the value stays on the single line.
    pub fn set_value(&mut self, value: &str) {
        self.clear();
        self.textarea.insert_str(value.replace(['\r', '\n'], " "));
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
