pub mod autocomplete_render;
mod autocomplete_state;
mod debouncer;

pub use autocomplete_state::AutocompleteState;
pub use debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
