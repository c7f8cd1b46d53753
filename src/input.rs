mod input_render;
mod input_state;

pub use input_render::render_field;
pub use input_state::{InputState, field_textarea};
