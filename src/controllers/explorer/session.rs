use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::controllers::interactive::InteractiveController;
use crate::controllers::viewport::controller::{
    ViewportController, ViewportError, ZoomDirection, ZoomOutcome,
};
use crate::controllers::viewport::labels::CoordinateLabels;
use crate::controllers::viewport::notice::{Notice, TransientNotice};
use crate::core::actions::render::renderer::Renderer;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Everything a presentation layer talks to: zoom state, the background
/// renderer, the center labels and the transient notice.
///
/// Renders are submitted on every accepted zoom; finished frames arrive at the
/// presenter port handed to [`ExplorerSession::new`].
pub struct ExplorerSession {
    viewport: ViewportController,
    renderer: InteractiveController,
    center_labels: CoordinateLabels,
    notice: Option<TransientNotice>,
    notice_lifetime: Duration,
}

impl ExplorerSession {
    pub fn new(
        config: &MandelbrotConfig,
        renderer: Renderer,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Result<Self, MandelbrotConfigError> {
        config.validate()?;

        Ok(Self {
            viewport: ViewportController::from_config(config),
            renderer: InteractiveController::new(renderer, presenter_port),
            center_labels: CoordinateLabels::origin(),
            notice: None,
            notice_lifetime: config.notice_duration,
        })
    }

    /// Requests the first frame. Returns its generation.
    pub fn start(&mut self) -> u64 {
        self.submit_current_view()
    }

    pub fn zoom_in(&mut self, pixel: Point, now: Instant) -> Result<ZoomOutcome, ViewportError> {
        self.zoom(ZoomDirection::In, pixel, now)
    }

    pub fn zoom_out(&mut self, pixel: Point, now: Instant) -> Result<ZoomOutcome, ViewportError> {
        self.zoom(ZoomDirection::Out, pixel, now)
    }

    fn zoom(
        &mut self,
        direction: ZoomDirection,
        pixel: Point,
        now: Instant,
    ) -> Result<ZoomOutcome, ViewportError> {
        let outcome = self.viewport.zoom(direction, pixel)?;

        match &outcome {
            ZoomOutcome::Accepted(transition) => {
                self.center_labels = transition.labels.clone();
                self.submit_current_view();
            }
            ZoomOutcome::Rejected(_) => {
                self.notice = Some(TransientNotice::raise(
                    Notice::ZoomLimitReached,
                    now,
                    self.notice_lifetime,
                ));
            }
        }

        Ok(outcome)
    }

    /// Live coordinates under the cursor; no state changes and no render.
    pub fn cursor_moved(&self, pixel: Point) -> Result<CoordinateLabels, ViewportError> {
        let labels = self.viewport.cursor_labels(pixel)?;

        trace!(x = pixel.x, y = pixel.y, %labels, "cursor moved");

        Ok(labels)
    }

    #[must_use]
    pub fn center_labels(&self) -> &CoordinateLabels {
        &self.center_labels
    }

    #[must_use]
    pub fn active_notice(&self, now: Instant) -> Option<Notice> {
        self.notice
            .filter(|notice| notice.is_active(now))
            .map(|notice| notice.notice())
    }

    /// When the current notice stops showing, if one is still up at `now`.
    #[must_use]
    pub fn notice_expires_at(&self, now: Instant) -> Option<Instant> {
        self.notice
            .filter(|notice| notice.is_active(now))
            .map(|notice| notice.expires_at())
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.renderer.is_rendering()
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.renderer.latest_generation()
    }

    fn submit_current_view(&mut self) -> u64 {
        let request = RenderRequest {
            viewport: self.viewport.viewport(),
            step: self.viewport.step(),
        };
        let generation = self.renderer.submit_request(request);

        debug!(generation, step = request.step, "render submitted");

        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::events::render_event::RenderEvent;
    use crate::core::actions::render::evaluator_slot::EvaluatorSlot;
    use crate::core::data::pixel_grid::PixelGrid;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::colour_ramp::BandedColourRamp;
    use crate::core::zoom::ladder::ZoomIndex;
    use std::sync::Mutex;
    use std::thread;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn generations(&self) -> Vec<u64> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(RenderEvent::generation)
                .collect()
        }
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn config() -> MandelbrotConfig {
        MandelbrotConfig {
            grid: PixelGrid::new(161, 81).unwrap(),
            max_iterations: 50,
            ..MandelbrotConfig::default()
        }
    }

    fn session() -> (ExplorerSession, Arc<MockPresenterPort>) {
        let config = config();
        let in_set = |_: f64, _: f64, _: u32| -> u32 { 0 };
        let renderer = Renderer::from_config(
            Arc::new(EvaluatorSlot::ready(Arc::new(in_set))),
            Arc::new(BandedColourRamp),
            &config,
        );
        let presenter_port = Arc::new(MockPresenterPort::default());
        let session = ExplorerSession::new(
            &config,
            renderer,
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>,
        )
        .unwrap();

        (session, presenter_port)
    }

    fn wait_for_generation(presenter_port: &MockPresenterPort, generation: u64) {
        let start = Instant::now();
        while presenter_port.generations().last() != Some(&generation)
            && start.elapsed() < Duration::from_secs(5)
        {
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MandelbrotConfig::default().with_max_iterations(0);
        let renderer = Renderer::from_config(
            Arc::new(EvaluatorSlot::empty()),
            Arc::new(BandedColourRamp),
            &config,
        );

        let result = ExplorerSession::new(
            &config,
            renderer,
            Arc::new(MockPresenterPort::default()),
        );

        assert!(matches!(result, Err(MandelbrotConfigError::ZeroMaxIterations)));
    }

    #[test]
    fn test_start_renders_initial_view() {
        let (mut session, presenter_port) = session();

        assert_eq!(session.center_labels(), &CoordinateLabels::origin());
        let generation = session.start();
        wait_for_generation(&presenter_port, generation);

        assert!(!session.is_rendering());
        assert_eq!(presenter_port.generations(), vec![generation]);
        assert_eq!(session.viewport().viewport(), Viewport::INITIAL);
    }

    #[test]
    fn test_accepted_zoom_updates_labels_and_renders() {
        let (mut session, presenter_port) = session();
        let first = session.start();
        wait_for_generation(&presenter_port, first);

        // center of a 161x81 grid at step 0.0025 is (-1.8, 0.9)
        let outcome = session.zoom_in(Point::new(80, 40), Instant::now()).unwrap();
        wait_for_generation(&presenter_port, 2);

        assert!(matches!(outcome, ZoomOutcome::Accepted(_)));
        assert_eq!(session.viewport().zoom_index(), ZoomIndex::new(1).unwrap());
        assert_eq!(session.center_labels().x, "-1.8");
        assert_eq!(session.center_labels().y, "0.9");
        assert_eq!(session.latest_generation(), 2);
        assert_eq!(presenter_port.generations().last(), Some(&2));
    }

    #[test]
    fn test_rejected_zoom_raises_notice_without_rendering() {
        let (mut session, _presenter_port) = session();
        let now = Instant::now();

        let outcome = session.zoom_out(Point::new(10, 10), now).unwrap();

        assert!(matches!(outcome, ZoomOutcome::Rejected(_)));
        assert_eq!(session.latest_generation(), 0);
        assert_eq!(session.active_notice(now), Some(Notice::ZoomLimitReached));
        assert_eq!(
            session.active_notice(now + Duration::from_millis(2999)),
            Some(Notice::ZoomLimitReached)
        );
        assert_eq!(session.active_notice(now + Duration::from_millis(3000)), None);
        assert_eq!(
            session.notice_expires_at(now),
            Some(now + Duration::from_millis(3000))
        );
        assert_eq!(
            session.notice_expires_at(now + Duration::from_millis(3000)),
            None
        );
    }

    #[test]
    fn test_cursor_moved_leaves_state_alone() {
        let (session, _presenter_port) = session();

        let labels = session.cursor_moved(Point::new(0, 0)).unwrap();

        assert_eq!(labels.x_text(), "X: -2");
        assert_eq!(labels.y_text(), "Y: 1");
        assert_eq!(session.latest_generation(), 0);
        assert_eq!(session.center_labels(), &CoordinateLabels::origin());
    }

    #[test]
    fn test_click_outside_grid_is_reported() {
        let (mut session, _presenter_port) = session();

        let result = session.zoom_in(Point::new(161, 0), Instant::now());

        assert!(matches!(result, Err(ViewportError::PixelOutsideGrid(_))));
        assert_eq!(session.latest_generation(), 0);
    }
}
