use crate::controllers::cli::args::Click;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::viewport::controller::{ViewportController, ViewportError, ZoomOutcome};
use crate::controllers::viewport::labels::CoordinateLabels;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::evaluator_slot::EvaluatorSlot;
use crate::core::actions::render::renderer::Renderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colour_ramp::BandedColourRamp;
use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;
use crate::core::fractals::mandelbrot::escape_time::MandelbrotEvaluator;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::zoom::ladder::ZoomIndex;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug)]
pub enum CliRenderError {
    Config(MandelbrotConfigError),
    Viewport(ViewportError),
    Render(RenderError),
}

impl fmt::Display for CliRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::Viewport(err) => write!(f, "{}", err),
            Self::Render(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CliRenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<MandelbrotConfigError> for CliRenderError {
    fn from(err: MandelbrotConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ViewportError> for CliRenderError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RenderError> for CliRenderError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub zoom_index: ZoomIndex,
    pub step: f64,
    pub center_labels: CoordinateLabels,
    pub rejected_clicks: usize,
    pub render_duration: Duration,
}

/// Replays clicks against a fresh viewport and renders the final view once,
/// synchronously.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: MandelbrotConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: MandelbrotConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn generate(&mut self, clicks: &[Click]) -> Result<RenderSummary, CliRenderError> {
        self.config.validate()?;

        let mut viewport = ViewportController::from_config(&self.config);
        let mut center_labels = CoordinateLabels::origin();
        let mut rejected_clicks = 0;

        for click in clicks {
            match viewport.zoom(click.direction, click.pixel)? {
                ZoomOutcome::Accepted(transition) => center_labels = transition.labels,
                ZoomOutcome::Rejected(limit) => {
                    warn!(?limit, "ignoring click past the end of the zoom ladder");
                    rejected_clicks += 1;
                }
            }
        }

        let renderer = Renderer::from_config(
            Arc::new(EvaluatorSlot::ready(Arc::new(MandelbrotEvaluator))),
            Arc::new(BandedColourRamp),
            &self.config,
        );

        info!(
            width = self.config.grid.width(),
            height = self.config.grid.height(),
            max_iterations = self.config.max_iterations,
            zoom_index = %viewport.zoom_index(),
            "rendering"
        );

        let start = Instant::now();
        let buffer = renderer.render(viewport.viewport(), viewport.step(), &NeverCancel)?;
        let render_duration = start.elapsed();

        info!(duration_ms = render_duration.as_millis() as u64, "render complete");

        self.buffer = Some(buffer);

        Ok(RenderSummary {
            zoom_index: viewport.zoom_index(),
            step: viewport.step(),
            center_labels,
            rejected_clicks,
            render_duration,
        })
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated frame. A path without an extension gets the
    /// presenter's one.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };

        let filepath = filepath.as_ref();

        if filepath.extension().is_some() {
            self.presenter.present(buffer, filepath)
        } else {
            self.presenter
                .present(buffer, &filepath.with_extension(self.presenter.extension()))
        }
    }
}
