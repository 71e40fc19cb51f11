use crate::core::data::complex::Complex;

/// Top-left complex coordinate of the visible window. The window's extent
/// follows from the current zoom step and the pixel grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin: Complex,
}

impl Viewport {
    /// Top-left corner of the fractal bounds, where every session starts.
    pub const INITIAL: Self = Self {
        origin: Complex::new(-2.0, 1.0),
    };

    #[must_use]
    pub const fn new(origin_x: f64, origin_y: f64) -> Self {
        Self {
            origin: Complex::new(origin_x, origin_y),
        }
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn origin_x(&self) -> f64 {
        self.origin.real
    }

    #[must_use]
    pub fn origin_y(&self) -> f64 {
        self.origin.imag
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::INITIAL
    }
}
