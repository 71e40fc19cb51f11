use crate::core::data::complex::Complex;

/// Axis-aligned region of the complex plane, stored by its minimum and maximum
/// corners. Imaginary values grow upwards, so `max.imag` is the top edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

/// The region the viewer can never scroll outside of.
pub const FRACTAL_BOUNDS: ComplexRect = ComplexRect {
    min: Complex::new(-2.0, -1.0),
    max: Complex::new(2.0, 1.0),
};

impl ComplexRect {
    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    /// True when `point` lies inside the rect, allowing `epsilon` of overshoot
    /// on every edge.
    #[must_use]
    pub fn contains_point_within(&self, point: Complex, epsilon: f64) -> bool {
        self.min.real - epsilon <= point.real
            && self.min.imag - epsilon <= point.imag
            && self.max.real + epsilon >= point.real
            && self.max.imag + epsilon >= point.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractal_bounds_dimensions() {
        assert_eq!(FRACTAL_BOUNDS.width(), 4.0);
        assert_eq!(FRACTAL_BOUNDS.height(), 2.0);
        assert_eq!(FRACTAL_BOUNDS.min(), Complex::new(-2.0, -1.0));
        assert_eq!(FRACTAL_BOUNDS.max(), Complex::new(2.0, 1.0));
    }

    #[test]
    fn test_contains_point_within_tolerates_epsilon() {
        assert!(FRACTAL_BOUNDS.contains_point_within(Complex::new(0.0, 0.0), 0.0));
        assert!(FRACTAL_BOUNDS.contains_point_within(Complex::new(-2.0, 1.0), 0.0));
        assert!(!FRACTAL_BOUNDS.contains_point_within(Complex::new(2.0 + 1e-15, 1.0), 0.0));
        assert!(FRACTAL_BOUNDS.contains_point_within(Complex::new(2.0 + 1e-15, 1.0 + 1e-15), 1e-12));
        assert!(!FRACTAL_BOUNDS.contains_point_within(Complex::new(2.1, 0.0), 1e-12));
        assert!(!FRACTAL_BOUNDS.contains_point_within(Complex::new(0.0, -1.1), 1e-12));
    }
}
