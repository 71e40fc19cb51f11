use crate::core::data::complex_rect::FRACTAL_BOUNDS;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;
use crate::core::zoom::ladder::ZoomIndex;
use std::time::Duration;

pub const DEFAULT_MAX_ITERATIONS: u32 = 5000;
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);
pub const DEFAULT_LABEL_DECIMALS: u32 = 13;

/// Past this an `f64` has no more decimal digits to show.
const MAX_LABEL_DECIMALS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub grid: PixelGrid,
    pub max_iterations: u32,
    pub notice_duration: Duration,
    pub label_decimals: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            grid: PixelGrid::VIEWER,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            notice_duration: DEFAULT_NOTICE_DURATION,
            label_decimals: DEFAULT_LABEL_DECIMALS,
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), MandelbrotConfigError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotConfigError::ZeroMaxIterations);
        }

        if self.grid.width() % 2 == 0 || self.grid.height() % 2 == 0 {
            return Err(MandelbrotConfigError::EvenGridDimension {
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        // the widest window must fit inside the bounds
        let widest_step = ZoomIndex::MIN.step_size();
        if 2.0 * self.grid.half_width() * widest_step > FRACTAL_BOUNDS.width()
            || 2.0 * self.grid.half_height() * widest_step > FRACTAL_BOUNDS.height()
        {
            return Err(MandelbrotConfigError::ViewLargerThanBounds {
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        if self.notice_duration.is_zero() {
            return Err(MandelbrotConfigError::ZeroNoticeDuration);
        }

        if self.label_decimals > MAX_LABEL_DECIMALS {
            return Err(MandelbrotConfigError::LabelDecimalsTooLarge {
                decimals: self.label_decimals,
                max: MAX_LABEL_DECIMALS,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }
}
