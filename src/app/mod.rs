mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

// Re-export public types
pub use app_state::{App, EMPTY_TICKER_MESSAGE, Focus};
pub use mouse_click::{ClickTracker, DOUBLE_CLICK_MS, handle_click};
