pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod escape_result;
pub mod pixel_buffer;
pub mod pixel_grid;
pub mod point;
pub mod viewport;
