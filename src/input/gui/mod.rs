//! Windowed viewer: winit for the window, pixels for the framebuffer and egui
//! for the coordinate labels and status overlay.

mod app;
pub mod events;
mod run_gui;

pub use run_gui::{GuiError, run_gui};
