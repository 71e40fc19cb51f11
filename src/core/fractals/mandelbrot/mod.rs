pub mod colour_ramp;
pub mod errors;
pub mod escape_time;
pub mod mandelbrot_config;
