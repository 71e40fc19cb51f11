use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelGridError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "pixel grid must be at least 2x2 pixels: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PixelGridError {}

/// Dimensions of the pixel grid a view is rendered into. The grid always starts
/// at pixel `(0, 0)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
}

impl PixelGrid {
    /// The fixed 1601x801 canvas of the viewer.
    pub const VIEWER: Self = Self {
        width: 1601,
        height: 801,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, PixelGridError> {
        if width < 2 || height < 2 {
            return Err(PixelGridError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Pixel distance from the grid's center column to its left edge.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        f64::from(self.width - 1) / 2.0
    }

    /// Pixel distance from the grid's center row to its top edge.
    #[must_use]
    pub fn half_height(&self) -> f64 {
        f64::from(self.height - 1) / 2.0
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: (self.width - 1) / 2,
            y: (self.height - 1) / 2,
        }
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::VIEWER
    }
}
