use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::actions::render::ports::escape_evaluator::EscapeEvaluator;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

/// Everything a render needs besides the cancellation token.
pub struct RenderInputs<'a, E: ?Sized, M: ?Sized> {
    pub grid: PixelGrid,
    pub viewport: Viewport,
    pub step: f64,
    pub evaluator: &'a E,
    pub colour_map: &'a M,
    pub max_iterations: u32,
}

impl<E: ?Sized, M: ?Sized> Clone for RenderInputs<'_, E, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized, M: ?Sized> Copy for RenderInputs<'_, E, M> {}

/// Renders the full grid in parallel, one row per rayon task.
///
/// Each row owns a disjoint slice of the output, so no locking is needed.
/// Every row polls `cancel` before its first pixel and then every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels; a cancelled render returns
/// [`Cancelled`] and its partial buffer is dropped.
pub fn render_pixel_buffer<E, M, C>(
    inputs: RenderInputs<'_, E, M>,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled>
where
    E: EscapeEvaluator + ?Sized,
    M: ColourMap + ?Sized,
    C: CancelToken,
{
    let mut pixel_buffer = PixelBuffer::new(inputs.grid);
    let row_bytes = inputs.grid.width() as usize * BYTES_PER_PIXEL;

    pixel_buffer
        .buffer_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| render_row(&inputs, y as u32, row, cancel))?;

    Ok(pixel_buffer)
}

/// Single-threaded reference for [`render_pixel_buffer`].
pub fn render_pixel_buffer_serial<E, M, C>(
    inputs: RenderInputs<'_, E, M>,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled>
where
    E: EscapeEvaluator + ?Sized,
    M: ColourMap + ?Sized,
    C: CancelToken,
{
    let mut pixel_buffer = PixelBuffer::new(inputs.grid);
    let row_bytes = inputs.grid.width() as usize * BYTES_PER_PIXEL;

    for (y, row) in pixel_buffer.buffer_mut().chunks_mut(row_bytes).enumerate() {
        render_row(&inputs, y as u32, row, cancel)?;
    }

    Ok(pixel_buffer)
}

fn render_row<E, M, C>(
    inputs: &RenderInputs<'_, E, M>,
    y: u32,
    row: &mut [u8],
    cancel: &C,
) -> Result<(), Cancelled>
where
    E: EscapeEvaluator + ?Sized,
    M: ColourMap + ?Sized,
    C: CancelToken,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        let c = pixel_to_complex(Point::new(x as u32, y), inputs.viewport, inputs.step);
        let result = inputs
            .evaluator
            .evaluate(c.real, c.imag, inputs.max_iterations);

        pixel.copy_from_slice(&inputs.colour_map.map(result).to_bytes());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::colour::Colour;
    use crate::core::data::escape_result::EscapeResult;
    use crate::core::fractals::mandelbrot::colour_ramp::BandedColourRamp;
    use crate::core::fractals::mandelbrot::escape_time::MandelbrotEvaluator;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Encodes the pixel position into the colour so ordering is observable.
    struct PositionColourMap;

    impl ColourMap for PositionColourMap {
        fn map(&self, result: EscapeResult) -> Colour {
            let raw = result.raw();
            Colour::new((raw >> 8) as u8, raw as u8, 0, 255)
        }

        fn display_name(&self) -> &str {
            "Position"
        }
    }

    fn inputs<'a, E: ?Sized, M: ?Sized>(
        grid: PixelGrid,
        evaluator: &'a E,
        colour_map: &'a M,
    ) -> RenderInputs<'a, E, M> {
        RenderInputs {
            grid,
            viewport: Viewport::INITIAL,
            step: 0.0025,
            evaluator,
            colour_map,
            max_iterations: 5000,
        }
    }

    #[test]
    fn test_in_set_stub_renders_opaque_black() {
        let in_set = |_: f64, _: f64, _: u32| -> u32 { 0 };
        let grid = PixelGrid::VIEWER;

        let pixel_buffer =
            render_pixel_buffer(inputs(grid, &in_set, &BandedColourRamp), &NeverCancel).unwrap();

        assert_eq!(pixel_buffer.grid(), grid);
        assert_eq!(pixel_buffer.buffer_size(), 1601 * 801 * 4);
        assert!(
            pixel_buffer
                .buffer()
                .chunks_exact(4)
                .all(|pixel| pixel == [0, 0, 0, 255])
        );
    }

    #[test]
    fn test_pixels_are_written_row_major() {
        // Evaluator result is the flat pixel index + 1, recovered from the coordinates.
        let grid = PixelGrid::new(7, 5).unwrap();
        let index_of = |real: f64, imag: f64, _: u32| {
            let x = ((real + 2.0) / 0.0025).round() as u32;
            let y = ((1.0 - imag) / 0.0025).round() as u32;
            y * 7 + x + 1
        };

        let pixel_buffer =
            render_pixel_buffer(inputs(grid, &index_of, &PositionColourMap), &NeverCancel)
                .unwrap();

        for y in 0..5 {
            for x in 0..7 {
                let expected = y * 7 + x + 1;
                let o = ((y * 7 + x) as usize) * BYTES_PER_PIXEL;
                let (r, g) = (pixel_buffer.buffer()[o], pixel_buffer.buffer()[o + 1]);
                assert_eq!(u32::from(r) << 8 | u32::from(g), expected);
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let grid = PixelGrid::new(81, 41).unwrap();
        let evaluator = MandelbrotEvaluator;
        let render_inputs = RenderInputs {
            grid,
            viewport: Viewport::INITIAL,
            step: 0.05,
            evaluator: &evaluator,
            colour_map: &BandedColourRamp,
            max_iterations: 200,
        };

        let parallel = render_pixel_buffer(render_inputs, &NeverCancel).unwrap();
        let serial = render_pixel_buffer_serial(render_inputs, &NeverCancel).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_dyn_ports_are_accepted() {
        let evaluator: &dyn EscapeEvaluator = &MandelbrotEvaluator;
        let colour_map: &dyn ColourMap = &BandedColourRamp;
        let grid = PixelGrid::new(3, 3).unwrap();

        let result = render_pixel_buffer(inputs(grid, evaluator, colour_map), &NeverCancel);

        assert!(result.is_ok());
    }

    #[test]
    fn test_returns_cancelled_when_token_is_cancelled() {
        let in_set = |_: f64, _: f64, _: u32| -> u32 { 0 };
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = render_pixel_buffer(
            inputs(PixelGrid::VIEWER, &in_set, &BandedColourRamp),
            &cancel_token,
        );

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancels_after_k_polls() {
        let in_set = |_: f64, _: f64, _: u32| -> u32 { 0 };
        let poll_count = AtomicUsize::new(0);
        let cancel_after = 3;
        let cancel_token = || poll_count.fetch_add(1, Ordering::Relaxed) >= cancel_after;

        let result = render_pixel_buffer_serial(
            inputs(PixelGrid::new(5, 6).unwrap(), &in_set, &BandedColourRamp),
            &cancel_token,
        );

        assert_eq!(result, Err(Cancelled));
        assert_eq!(poll_count.load(Ordering::Relaxed), cancel_after + 1);
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let in_set = |_: f64, _: f64, _: u32| -> u32 { 0 };
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = render_pixel_buffer(
            inputs(PixelGrid::new(2, 5).unwrap(), &in_set, &BandedColourRamp),
            &cancel_token,
        );

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_cancellation_polled_within_wide_rows() {
        let in_set = |_: f64, _: f64, _: u32| -> u32 { 0 };
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        // 3000 wide: polls at 0, 1024 and 2048 on each of 2 rows
        let result = render_pixel_buffer(
            inputs(PixelGrid::new(3000, 2).unwrap(), &in_set, &BandedColourRamp),
            &cancel_token,
        );

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 6);
    }
}
