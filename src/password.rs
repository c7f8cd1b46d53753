//! Password field with a visibility toggle
//!
//! The field and its toggle button form one control group. The toggle handler
//! is handed that group explicitly, so it never has to look the field up.

mod password_render;
mod password_state;

pub use password_render::{TOGGLE_BUTTON_WIDTH, render_password_group};
pub use password_state::{MASK_CHAR, MASKED_ICON, PLAIN_ICON, PasswordField, toggle_visibility};
