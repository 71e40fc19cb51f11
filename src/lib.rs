//! Interactive Mandelbrot viewer.
//!
//! The view is a fixed pixel grid anchored at a top-left origin in the complex
//! plane. Clicks zoom along a fixed ladder of step sizes, centred on the
//! clicked pixel and clamped to `[-2, 2] x [-1, 1]`. Frames are rendered row
//! parallel on a background worker and superseded renders are cancelled.

pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use controllers::cli::args::{CliArgs, Click, ClickParseError, parse_click};
pub use controllers::cli::render_command::{CliRenderController, CliRenderError, RenderSummary};
pub use controllers::explorer::ExplorerSession;
pub use controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderEvent, RenderRequest,
};
pub use controllers::viewport::{
    CoordinateLabels, Notice, TransientNotice, ViewportController, ViewportError, ZoomDirection,
    ZoomOutcome,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel, RenderGenerations};
pub use crate::core::actions::render::errors::RenderError;
pub use crate::core::actions::render::evaluator_slot::{EvaluatorError, EvaluatorSlot};
pub use crate::core::actions::render::renderer::Renderer;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_grid::PixelGrid;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::colour_ramp::BandedColourRamp;
pub use crate::core::fractals::mandelbrot::escape_time::{MandelbrotEvaluator, mandelbrot};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::zoom::ladder::{ZOOM_LEVELS, ZoomIndex};
#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
pub use presenters::file::pam::PamFilePresenter;
