use crossterm::event::KeyEvent;
use tui_textarea::TextArea;

use crate::input::field_textarea;

/// Character drawn in place of each hidden character
pub const MASK_CHAR: char = '•';

/// Toggle glyph while the value is hidden
pub const MASKED_ICON: &str = "👁️";

/// Toggle glyph while the value is shown in plain text
pub const PLAIN_ICON: &str = "👁️‍🗨️";

/// A password input plus the state of its toggle button
pub struct PasswordField {
    pub textarea: TextArea<'static>,
    masked: bool,
}

impl PasswordField {
    /// New fields always start masked
    pub fn new() -> Self {
        let mut textarea = field_textarea("Password");
        textarea.set_mask_char(MASK_CHAR);
        Self {
            textarea,
            masked: true,
        }
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Glyph the toggle button shows for the current state
    pub fn icon(&self) -> &'static str {
        if self.masked { MASKED_ICON } else { PLAIN_ICON }
    }

    pub fn value(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
        if masked {
            self.textarea.set_mask_char(MASK_CHAR);
        } else {
            self.textarea.clear_mask_char();
        }
    }
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new()
    }
}

/// Toggle handler bound to a password control group
///
/// Flips between masked and plain text and swaps the button glyph to match.
pub fn toggle_visibility(field: &mut PasswordField) {
    let masked = !field.is_masked();
    field.set_masked(masked);
    log::debug!("Password field {}", if masked { "masked" } else { "shown" });
}

#[cfg(test)]
#[path = "password_state_tests.rs"]
mod password_state_tests;
