use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::evaluator_slot::EvaluatorSlot;
use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::actions::render::render_pixel_buffer::{RenderInputs, render_pixel_buffer};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Produces complete frames for a viewport snapshot using whatever evaluator
/// the slot holds at call time.
#[derive(Clone)]
pub struct Renderer {
    evaluator: Arc<EvaluatorSlot>,
    colour_map: Arc<dyn ColourMap>,
    grid: PixelGrid,
    max_iterations: u32,
}

impl Renderer {
    #[must_use]
    pub fn new(
        evaluator: Arc<EvaluatorSlot>,
        colour_map: Arc<dyn ColourMap>,
        grid: PixelGrid,
        max_iterations: u32,
    ) -> Self {
        Self {
            evaluator,
            colour_map,
            grid,
            max_iterations,
        }
    }

    #[must_use]
    pub fn from_config(
        evaluator: Arc<EvaluatorSlot>,
        colour_map: Arc<dyn ColourMap>,
        config: &MandelbrotConfig,
    ) -> Self {
        Self::new(evaluator, colour_map, config.grid, config.max_iterations)
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.evaluator.is_ready()
    }

    pub fn render<C: CancelToken>(
        &self,
        viewport: Viewport,
        step: f64,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderError> {
        let evaluator = self.evaluator.get()?;

        let inputs = RenderInputs {
            grid: self.grid,
            viewport,
            step,
            evaluator: evaluator.as_ref(),
            colour_map: self.colour_map.as_ref(),
            max_iterations: self.max_iterations,
        };

        render_pixel_buffer(inputs, cancel).map_err(|cancelled| {
            trace!(
                origin_x = viewport.origin_x(),
                origin_y = viewport.origin_y(),
                step,
                "render cancelled"
            );
            RenderError::from(cancelled)
        })
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("evaluator", &self.evaluator)
            .field("colour_map", &self.colour_map.display_name())
            .field("grid", &self.grid)
            .field("max_iterations", &self.max_iterations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::{Cancelled, NeverCancel};
    use crate::core::actions::render::evaluator_slot::EvaluatorError;
    use crate::core::data::escape_result::EscapeResult;
    use crate::core::fractals::mandelbrot::colour_ramp::BandedColourRamp;
    use crate::core::fractals::mandelbrot::escape_time::MandelbrotEvaluator;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn renderer(slot: EvaluatorSlot, grid: PixelGrid) -> Renderer {
        Renderer::new(Arc::new(slot), Arc::new(BandedColourRamp), grid, 5000)
    }

    #[test]
    fn test_render_without_evaluator_fails_fast() {
        let renderer = renderer(EvaluatorSlot::empty(), PixelGrid::VIEWER);

        assert!(!renderer.is_ready());
        assert_eq!(
            renderer.render(Viewport::INITIAL, 0.0025, &NeverCancel),
            Err(RenderError::NotReady(EvaluatorError::NotReady))
        );
    }

    #[test]
    fn test_render_initial_view_with_in_set_stub_is_opaque_black() {
        let slot = EvaluatorSlot::ready(Arc::new(|_: f64, _: f64, _: u32| -> u32 { 0 }));
        let renderer = renderer(slot, PixelGrid::VIEWER);

        let pixel_buffer = renderer
            .render(Viewport::INITIAL, 0.0025, &NeverCancel)
            .unwrap();

        assert_eq!(pixel_buffer.buffer_size(), 1601 * 801 * 4);
        assert!(
            pixel_buffer
                .buffer()
                .chunks_exact(4)
                .all(|pixel| pixel == [0, 0, 0, 255])
        );
    }

    #[test]
    fn test_render_passes_budget_to_evaluator() {
        let seen_budget = Arc::new(AtomicU32::new(0));
        let recorder = Arc::clone(&seen_budget);
        let slot = EvaluatorSlot::ready(Arc::new(move |_: f64, _: f64, max: u32| -> u32 {
            recorder.store(max, Ordering::Relaxed);
            0
        }));
        let renderer = renderer(slot, PixelGrid::new(3, 3).unwrap());

        renderer
            .render(Viewport::INITIAL, 0.0025, &NeverCancel)
            .unwrap();

        assert_eq!(seen_budget.load(Ordering::Relaxed), 5000);
    }

    #[test]
    fn test_evaluator_installed_after_construction_is_used() {
        let slot = Arc::new(EvaluatorSlot::empty());
        let renderer = Renderer::new(
            Arc::clone(&slot),
            Arc::new(BandedColourRamp),
            PixelGrid::new(3, 3).unwrap(),
            100,
        );

        slot.install(Arc::new(MandelbrotEvaluator)).unwrap();
        let pixel_buffer = renderer
            .render(Viewport::INITIAL, 0.0025, &NeverCancel)
            .unwrap();

        // (-2, 1) escapes on the first iteration
        assert_eq!(
            &pixel_buffer.buffer()[..4],
            &BandedColourRamp::colour_for(EscapeResult::from(1u32)).to_bytes()
        );
    }

    #[test]
    fn test_cancelled_render_reports_cancelled() {
        let renderer = renderer(EvaluatorSlot::ready(Arc::new(MandelbrotEvaluator)), PixelGrid::VIEWER);

        let result = renderer.render(Viewport::INITIAL, 0.0025, &|| true);

        assert_eq!(result, Err(RenderError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_from_config_uses_config_grid_and_budget() {
        let config = MandelbrotConfig::default().with_max_iterations(64);
        let renderer = Renderer::from_config(
            Arc::new(EvaluatorSlot::empty()),
            Arc::new(BandedColourRamp),
            &config,
        );

        assert_eq!(renderer.grid(), PixelGrid::VIEWER);
        assert_eq!(renderer.max_iterations(), 64);
    }
}
