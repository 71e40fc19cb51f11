pub mod errors;
pub mod evaluator_slot;
pub mod ports;
pub mod render_pixel_buffer;
pub mod renderer;
