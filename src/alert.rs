//! Blocking alert popup
//!
//! While an alert is visible it swallows all input until dismissed.

mod alert_render;
mod alert_state;

pub use alert_render::render_alert;
pub use alert_state::AlertState;
