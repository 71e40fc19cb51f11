use crate::controllers::viewport::labels::CoordinateLabels;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::FRACTAL_BOUNDS;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_LABEL_DECIMALS, MandelbrotConfig,
};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use crate::core::zoom::ladder::ZoomIndex;
use std::error::Error;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    PixelOutsideGrid(PixelToComplexCoordsError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideGrid(err) => write!(f, "cannot zoom: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelOutsideGrid(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for ViewportError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::PixelOutsideGrid(err)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    fn delta(self) -> i32 {
        match self {
            Self::In => 1,
            Self::Out => -1,
        }
    }
}

/// The state reached after an accepted zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTransition {
    pub zoom_index: ZoomIndex,
    pub step: f64,
    pub viewport: Viewport,
    /// The clicked point, before clamping moved the window.
    pub center: Complex,
    pub labels: CoordinateLabels,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZoomLimitReached {
    pub direction: ZoomDirection,
    pub zoom_index: ZoomIndex,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomOutcome {
    Accepted(ZoomTransition),
    Rejected(ZoomLimitReached),
}

/// Owns the zoom index and viewport origin, the only state that survives
/// between clicks.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    zoom_index: ZoomIndex,
    viewport: Viewport,
    grid: PixelGrid,
    label_decimals: u32,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(PixelGrid::VIEWER, DEFAULT_LABEL_DECIMALS)
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(grid: PixelGrid, label_decimals: u32) -> Self {
        Self {
            zoom_index: ZoomIndex::MIN,
            viewport: Viewport::INITIAL,
            grid,
            label_decimals,
        }
    }

    #[must_use]
    pub fn from_config(config: &MandelbrotConfig) -> Self {
        Self::new(config.grid, config.label_decimals)
    }

    #[must_use]
    pub fn zoom_index(&self) -> ZoomIndex {
        self.zoom_index
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.zoom_index.step_size()
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    pub fn zoom_in(&mut self, pixel: Point) -> Result<ZoomOutcome, ViewportError> {
        self.zoom(ZoomDirection::In, pixel)
    }

    pub fn zoom_out(&mut self, pixel: Point) -> Result<ZoomOutcome, ViewportError> {
        self.zoom(ZoomDirection::Out, pixel)
    }

    /// Recenters the window on `pixel` one rung further along the ladder,
    /// clamping it back inside the fractal bounds.
    ///
    /// Stepping past either end of the ladder is not an error: the state is
    /// left untouched and [`ZoomOutcome::Rejected`] is returned.
    pub fn zoom(
        &mut self,
        direction: ZoomDirection,
        pixel: Point,
    ) -> Result<ZoomOutcome, ViewportError> {
        let center = pixel_to_complex_coords(pixel, self.grid, self.viewport, self.step())?;

        let Ok(zoom_index) = self.zoom_index.offset(direction.delta()) else {
            warn!(?direction, zoom_index = %self.zoom_index, "zoom limit reached");
            return Ok(ZoomOutcome::Rejected(ZoomLimitReached {
                direction,
                zoom_index: self.zoom_index,
            }));
        };

        let step = zoom_index.step_size();
        let viewport = self.clamped_viewport(center, step);

        let labels = if zoom_index == ZoomIndex::MIN {
            CoordinateLabels::origin()
        } else {
            CoordinateLabels::for_point(center, self.label_decimals)
        };

        self.zoom_index = zoom_index;
        self.viewport = viewport;

        debug!(
            ?direction,
            zoom_index = %zoom_index,
            step,
            origin_x = viewport.origin_x(),
            origin_y = viewport.origin_y(),
            "zoomed"
        );

        Ok(ZoomOutcome::Accepted(ZoomTransition {
            zoom_index,
            step,
            viewport,
            center,
            labels,
        }))
    }

    /// Coordinates under the cursor. Does not touch any state.
    pub fn cursor_labels(&self, pixel: Point) -> Result<CoordinateLabels, ViewportError> {
        let point = pixel_to_complex_coords(pixel, self.grid, self.viewport, self.step())?;

        Ok(CoordinateLabels::for_point(point, self.label_decimals))
    }

    fn clamped_viewport(&self, center: Complex, step: f64) -> Viewport {
        let half_width = self.grid.half_width() * step;
        let half_height = self.grid.half_height() * step;
        let min = FRACTAL_BOUNDS.min();
        let max = FRACTAL_BOUNDS.max();

        let origin_x = if center.real - half_width < min.real {
            min.real
        } else if center.real + half_width > max.real {
            max.real - 2.0 * half_width
        } else {
            center.real - half_width
        };

        let origin_y = if center.imag + half_height >= max.imag {
            max.imag
        } else if center.imag - half_height <= min.imag {
            min.imag + 2.0 * half_height
        } else {
            center.imag + half_height
        };

        debug_assert!(
            FRACTAL_BOUNDS.contains_point_within(Complex::new(origin_x, origin_y), 1e-9)
                && FRACTAL_BOUNDS.contains_point_within(
                    Complex::new(origin_x + 2.0 * half_width, origin_y - 2.0 * half_height),
                    1e-9
                ),
            "{}x{} window at step {} does not fit the fractal bounds",
            self.grid.width(),
            self.grid.height(),
            step
        );

        Viewport::new(origin_x, origin_y)
    }
}
