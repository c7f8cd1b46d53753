use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click::handle_click;
use crate::layout::region_at;
use crate::password::toggle_visibility;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if self.alert.is_visible() {
                    return;
                }
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                handle_click(self, region, now);
            }
            Event::Paste(text) => self.handle_paste_event(&text, now),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // A visible alert blocks everything until it is acknowledged
        if self.alert.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert.dismiss();
            }
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Ticker => {
                if self.input.handle_key(key) {
                    self.on_ticker_edited(now);
                }
            }
            Focus::Password => {
                if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    toggle_visibility(&mut self.password);
                    return;
                }
                self.password.handle_key(key);
            }
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            // Esc closes the panel first, then quits
            KeyCode::Esc => {
                if self.autocomplete.is_visible() {
                    self.autocomplete.hide();
                } else {
                    self.should_quit = true;
                }
                true
            }
            KeyCode::Enter => {
                self.submit();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.cycle_focus();
                true
            }
            _ => false,
        }
    }

    /// Pasted text goes into the focused field as if typed
    pub fn handle_paste_event(&mut self, text: &str, now: Instant) {
        // Fields are single-line
        let text = text.replace(['\r', '\n'], " ");
        match self.focus {
            Focus::Ticker => {
                if self.input.textarea.insert_str(&text) {
                    self.on_ticker_edited(now);
                }
            }
            Focus::Password => {
                self.password.textarea.insert_str(&text);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
