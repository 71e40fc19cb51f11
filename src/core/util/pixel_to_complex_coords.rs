use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, grid: PixelGrid },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, grid } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel grid",
                    point.x,
                    point.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to the complex plane. Pixel `(0, 0)` lands on the viewport
/// origin, `x` grows along the real axis and `y` grows down the imaginary axis.
#[inline]
#[must_use]
pub fn pixel_to_complex(pixel: Point, viewport: Viewport, step: f64) -> Complex {
    Complex {
        real: viewport.origin_x() + f64::from(pixel.x) * step,
        imag: viewport.origin_y() - f64::from(pixel.y) * step,
    }
}

/// Same as [`pixel_to_complex`] but refuses pixels outside `grid`.
pub fn pixel_to_complex_coords(
    pixel: Point,
    grid: PixelGrid,
    viewport: Viewport,
    step: f64,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !grid.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid { point: pixel, grid });
    }

    Ok(pixel_to_complex(pixel, viewport, step))
}

/// Inverse of [`pixel_to_complex`], rounded to the nearest pixel. Returns `None`
/// when the point lies above or left of the viewport origin.
#[must_use]
pub fn complex_to_pixel(point: Complex, viewport: Viewport, step: f64) -> Option<Point> {
    let x = ((point.real - viewport.origin_x()) / step).round();
    let y = ((viewport.origin_y() - point.imag) / step).round();

    Some(Point {
        x: to_pixel_coordinate(x)?,
        y: to_pixel_coordinate(y)?,
    })
}

fn to_pixel_coordinate(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }

    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::zoom::ladder::{ZoomIndex, step_size};
    use proptest::prelude::*;

    #[test]
    fn test_origin_pixel_maps_to_viewport_origin() {
        let result = pixel_to_complex(Point::new(0, 0), Viewport::INITIAL, 0.0025);

        assert_eq!(result, Complex::new(-2.0, 1.0));
    }

    #[test]
    fn test_bottom_right_of_initial_view_is_bottom_right_of_bounds() {
        let result = pixel_to_complex(Point::new(1600, 800), Viewport::INITIAL, 0.0025);

        assert_eq!(result, Complex::new(2.0, -1.0));
    }

    #[test]
    fn test_center_of_initial_view() {
        let result = pixel_to_complex(Point::new(800, 400), Viewport::INITIAL, 0.0025);

        assert_eq!(result, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_y_grows_downwards() {
        let top = pixel_to_complex(Point::new(0, 0), Viewport::INITIAL, 0.001);
        let below = pixel_to_complex(Point::new(0, 1), Viewport::INITIAL, 0.001);

        assert!(below.imag < top.imag);
    }

    #[test]
    fn test_checked_mapping_rejects_pixels_outside_grid() {
        let grid = PixelGrid::VIEWER;
        let point = Point::new(1601, 0);

        assert_eq!(
            pixel_to_complex_coords(point, grid, Viewport::INITIAL, 0.0025),
            Err(PixelToComplexCoordsError::PointOutsideGrid { point, grid })
        );
        assert_eq!(
            pixel_to_complex_coords(Point::new(1600, 800), grid, Viewport::INITIAL, 0.0025),
            Ok(Complex::new(2.0, -1.0))
        );
    }

    #[test]
    fn test_complex_to_pixel_rejects_points_before_origin() {
        assert_eq!(
            complex_to_pixel(Complex::new(-2.5, 0.0), Viewport::INITIAL, 0.0025),
            None
        );
        assert_eq!(
            complex_to_pixel(Complex::new(0.0, 1.5), Viewport::INITIAL, 0.0025),
            None
        );
        assert_eq!(
            complex_to_pixel(Complex::new(0.0, 0.0), Viewport::INITIAL, 0.0025),
            Some(Point::new(800, 400))
        );
    }

    proptest! {
        #[test]
        fn neighbouring_pixels_differ_by_one_step(
            x in 0u32..1600,
            y in 0u32..800,
            rung in 0u32..40,
            origin_x in -2.0f64..0.0,
            origin_y in 0.0f64..1.0,
        ) {
            let step = step_size(ZoomIndex::new(rung).unwrap());
            let viewport = Viewport::new(origin_x, origin_y);
            let here = pixel_to_complex(Point::new(x, y), viewport, step);
            let right = pixel_to_complex(Point::new(x + 1, y), viewport, step);
            let below = pixel_to_complex(Point::new(x, y + 1), viewport, step);
            let tolerance = 4.0 * f64::EPSILON * 2.0;

            prop_assert!(((right.real - here.real) - step).abs() <= tolerance);
            prop_assert_eq!(right.imag, here.imag);
            prop_assert!(((here.imag - below.imag) - step).abs() <= tolerance);
            prop_assert_eq!(below.real, here.real);
        }

        #[test]
        fn round_trip_recovers_pixel_within_one(
            x in 0u32..1601,
            y in 0u32..801,
            rung in 0u32..37,
            origin_x in -2.0f64..0.0,
            origin_y in 0.0f64..1.0,
        ) {
            let step = step_size(ZoomIndex::new(rung).unwrap());
            let viewport = Viewport::new(origin_x, origin_y);
            let point = Point::new(x, y);

            let recovered = complex_to_pixel(pixel_to_complex(point, viewport, step), viewport, step);

            prop_assert!(recovered.is_some());
            let recovered = recovered.unwrap();
            prop_assert!(recovered.x.abs_diff(x) <= 1);
            prop_assert!(recovered.y.abs_diff(y) <= 1);
        }

        #[test]
        fn distinct_pixels_map_to_distinct_points_on_shallow_rungs(
            a in (0u32..1601, 0u32..801),
            b in (0u32..1601, 0u32..801),
            rung in 0u32..30,
        ) {
            prop_assume!(a != b);
            let step = step_size(ZoomIndex::new(rung).unwrap());

            let first = pixel_to_complex(Point::new(a.0, a.1), Viewport::INITIAL, step);
            let second = pixel_to_complex(Point::new(b.0, b.1), Viewport::INITIAL, step);

            prop_assert_ne!(first, second);
        }
    }
}
