use crate::controllers::explorer::session::ExplorerSession;
use crate::controllers::viewport::controller::{ViewportError, ZoomOutcome};
use crate::controllers::viewport::labels::CoordinateLabels;
use crate::core::data::point::Point;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::{Align2, Color32, Context, RichText};
use egui_winit::State as EguiWinitState;
use std::time::Instant;
use tracing::{debug, warn};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

const LABEL_MARGIN: f32 = 10.0;

pub struct GuiApp {
    presenter: PixelsPresenter,
    session: ExplorerSession,
    evaluator_ready: bool,
    cursor_pixel: Option<Point>,
    cursor_labels: Option<CoordinateLabels>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: PixelsPresenter,
        session: ExplorerSession,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            session,
            evaluator_ready: false,
            cursor_pixel: None,
            cursor_labels: None,
            egui_ctx,
            egui_state,
        }
    }

    #[must_use]
    pub fn session(&self) -> &ExplorerSession {
        &self.session
    }

    pub fn evaluator_ready(&mut self) {
        self.evaluator_ready = true;
        self.session.start();
    }

    /// Pulls in a finished frame. Returns whether a redraw is needed.
    pub fn on_wake(&mut self) -> bool {
        self.presenter.maybe_draw_frame()
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.presenter.resize_surface(width, height)
    }

    /// Forwards the event to egui. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Tracks the cursor and refreshes its labels. Returns whether they changed.
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> bool {
        let pixel = self.presenter.window_pos_to_pixel(position);
        let labels = pixel.and_then(|pixel| self.session.cursor_moved(pixel).ok());
        let changed = labels != self.cursor_labels;

        self.cursor_pixel = pixel;
        self.cursor_labels = labels;

        changed
    }

    pub fn cursor_left(&mut self) -> bool {
        let changed = self.cursor_labels.is_some();

        self.cursor_pixel = None;
        self.cursor_labels = None;

        changed
    }

    /// Left click zooms in, right click zooms out, both around the cursor.
    /// Returns whether anything visible changed.
    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> bool {
        if state != ElementState::Pressed || !self.evaluator_ready {
            return false;
        }

        let Some(pixel) = self.cursor_pixel else {
            return false;
        };

        let now = Instant::now();
        let result = match button {
            MouseButton::Left => self.session.zoom_in(pixel, now),
            MouseButton::Right => self.session.zoom_out(pixel, now),
            _ => return false,
        };

        match result {
            Ok(ZoomOutcome::Accepted(transition)) => {
                debug!(zoom_index = %transition.zoom_index, "click accepted");
                self.cursor_labels = self.session.cursor_moved(pixel).ok();
                true
            }
            Ok(ZoomOutcome::Rejected(_)) => true,
            Err(ViewportError::PixelOutsideGrid(error)) => {
                warn!(%error, "click ignored");
                false
            }
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let now = Instant::now();
        let center_labels = self.session.center_labels().clone();
        let cursor_labels = self.cursor_labels.clone();
        let notice = self.session.active_notice(now);
        let rendering = self.session.is_rendering();
        let loading = !self.evaluator_ready;
        let error_message = self.presenter.last_error_message().map(str::to_owned);
        let last_render_duration = self.presenter.last_render_duration();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Area::new("center_labels")
                .anchor(Align2::LEFT_TOP, [LABEL_MARGIN, LABEL_MARGIN])
                .show(ctx, |ui| {
                    label_panel(ui, "Center", &center_labels);
                    if let Some(render_duration) = last_render_duration {
                        ui.label(
                            RichText::new(format!("Last render: {} ms", render_duration.as_millis()))
                                .small(),
                        );
                    }
                });

            if let Some(labels) = &cursor_labels {
                egui::Area::new("cursor_labels")
                    .anchor(Align2::RIGHT_TOP, [-LABEL_MARGIN, LABEL_MARGIN])
                    .show(ctx, |ui| label_panel(ui, "Cursor", labels));
            }

            let status = if loading {
                Some("Loading…".to_owned())
            } else if rendering {
                Some("Rendering…".to_owned())
            } else {
                None
            };

            if let Some(status) = status {
                egui::Area::new("status")
                    .anchor(Align2::LEFT_BOTTOM, [LABEL_MARGIN, -LABEL_MARGIN])
                    .show(ctx, |ui| {
                        ui.label(RichText::new(status).strong().background_color(Color32::WHITE));
                    });
            }

            if let Some(notice) = notice {
                egui::Area::new("notice")
                    .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.label(
                            RichText::new(notice.to_string())
                                .heading()
                                .color(Color32::WHITE)
                                .background_color(Color32::from_black_alpha(192)),
                        );
                    });
            }

            if let Some(message) = &error_message {
                egui::Area::new("error")
                    .anchor(Align2::RIGHT_BOTTOM, [-LABEL_MARGIN, -LABEL_MARGIN])
                    .show(ctx, |ui| {
                        ui.colored_label(Color32::LIGHT_RED, message);
                    });
            }
        })
    }
}

fn label_panel(ui: &mut egui::Ui, title: &str, labels: &CoordinateLabels) {
    egui::Frame::popup(ui.style()).show(ui, |ui| {
        ui.label(RichText::new(title).strong());
        ui.monospace(labels.x_text());
        ui.monospace(labels.y_text());
    });
}
