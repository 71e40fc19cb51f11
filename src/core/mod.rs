//! Domain logic with no knowledge of windows, files or threads beyond rayon.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod util;
pub mod zoom;
