use crate::core::actions::render::ports::escape_evaluator::EscapeEvaluator;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z = z^2 + c` from `z = 0` and returns the iteration on which `|z|`
/// first exceeds 2, or `0` if that never happens within `max_iterations`.
#[must_use]
pub fn mandelbrot(real: f64, imag: f64, max_iterations: u32) -> u32 {
    let c = Complex { real, imag };
    let mut z = Complex::ZERO;

    for iteration in 1..=max_iterations {
        z = z.square() + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    0
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MandelbrotEvaluator;

impl EscapeEvaluator for MandelbrotEvaluator {
    #[inline]
    fn evaluate(&self, real: f64, imag: f64, max_iterations: u32) -> EscapeResult {
        EscapeResult::from(mandelbrot(real, imag, max_iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 100, 5000] {
            assert_eq!(mandelbrot(0.0, 0.0, max_iterations), 0);
        }
    }

    #[test]
    fn test_zero_budget_reports_in_set() {
        assert_eq!(mandelbrot(10.0, 10.0, 0), 0);
    }

    #[test]
    fn test_far_point_escapes_on_first_iteration() {
        assert_eq!(mandelbrot(3.0, 0.0, 5000), 1);
        assert_eq!(mandelbrot(-2.0, 1.0, 5000), 1);
    }

    #[test]
    fn test_boundary_point_needs_strictly_greater_than_two() {
        // c = 2: z1 = 2 (|z| == 2, not escaped), z2 = 6
        assert_eq!(mandelbrot(2.0, 0.0, 5000), 2);
        // c = -2 stays on the boundary forever: 0, -2, 2, 2, ...
        assert_eq!(mandelbrot(-2.0, 0.0, 5000), 0);
    }

    #[test]
    fn test_escape_count_is_bounded_by_budget() {
        // c = 0.3 escapes slowly
        let unbounded = mandelbrot(0.3, 0.0, 5000);
        assert!(unbounded > 5);

        assert_eq!(mandelbrot(0.3, 0.0, 5), 0);
        assert_eq!(mandelbrot(0.3, 0.0, unbounded), unbounded);
    }

    #[test]
    fn test_cardioid_interior_is_in_set() {
        assert_eq!(mandelbrot(-0.5, 0.0, 5000), 0);
        assert_eq!(mandelbrot(-1.0, 0.0, 5000), 0);
        assert_eq!(mandelbrot(0.25, 0.0, 1000), 0);
    }

    #[test]
    fn test_evaluator_wraps_raw_counts() {
        let evaluator = MandelbrotEvaluator;

        assert_eq!(evaluator.evaluate(0.0, 0.0, 10), EscapeResult::InSet);
        assert_eq!(evaluator.evaluate(3.0, 0.0, 10).raw(), 1);
    }

    proptest! {
        #[test]
        fn evaluation_is_deterministic_and_bounded(
            real in -2.0f64..2.0,
            imag in -1.0f64..1.0,
            max_iterations in 1u32..500,
        ) {
            let first = mandelbrot(real, imag, max_iterations);
            let second = mandelbrot(real, imag, max_iterations);

            prop_assert_eq!(first, second);
            prop_assert!(first <= max_iterations);
        }

        #[test]
        fn conjugate_points_share_a_result(
            real in -2.0f64..2.0,
            imag in 0.0f64..1.0,
        ) {
            prop_assert_eq!(mandelbrot(real, imag, 300), mandelbrot(real, -imag, 300));
        }
    }
}
