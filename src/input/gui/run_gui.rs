use crate::controllers::explorer::session::ExplorerSession;
use crate::core::actions::render::evaluator_slot::EvaluatorSlot;
use crate::core::actions::render::renderer::Renderer;
use crate::core::fractals::mandelbrot::colour_ramp::BandedColourRamp;
use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;
use crate::core::fractals::mandelbrot::escape_time::MandelbrotEvaluator;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::GuiApp;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{error, info};
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::{Window, WindowBuilder};

#[derive(Debug)]
pub enum GuiError {
    Config(MandelbrotConfigError),
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid viewer configuration: {}", err),
            Self::EventLoop(err) => write!(f, "event loop failed: {}", err),
            Self::Window(err) => write!(f, "could not create window: {}", err),
            Self::Surface(err) => write!(f, "could not create drawing surface: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<MandelbrotConfigError> for GuiError {
    fn from(err: MandelbrotConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

/// Opens the viewer window and runs until it is closed.
///
/// The escape evaluator is installed from a background thread; until then the
/// window shows a loading indicator and clicks are ignored.
pub fn run_gui(config: MandelbrotConfig) -> Result<(), GuiError> {
    config.validate()?;

    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
    let event_loop_proxy = event_loop.create_proxy();
    let grid = config.grid;

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Viewer")
            .with_inner_size(PhysicalSize::new(grid.width(), grid.height()))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, event_loop_proxy.clone(), grid)?;
    let evaluator = Arc::new(EvaluatorSlot::empty());
    let renderer = Renderer::from_config(
        Arc::clone(&evaluator),
        Arc::new(BandedColourRamp),
        &config,
    );
    let session = ExplorerSession::new(&config, renderer, presenter.share_adapter())?;
    let mut app = GuiApp::new(window, &event_loop, presenter, session);

    thread::spawn(move || {
        if evaluator.install(Arc::new(MandelbrotEvaluator)).is_ok() {
            let _ = event_loop_proxy.send_event(GuiEvent::EvaluatorReady);
        }
    });

    info!(
        width = grid.width(),
        height = grid.height(),
        max_iterations = config.max_iterations,
        "viewer window opened"
    );

    let mut redraw_pending = true;

    event_loop.run(|event, elwt| match event {
        Event::UserEvent(GuiEvent::Wake) => {
            if app.on_wake() {
                redraw_pending = true;
            }
        }
        Event::UserEvent(GuiEvent::EvaluatorReady) => {
            info!("escape evaluator ready");
            app.evaluator_ready();
            redraw_pending = true;
        }
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

            if egui_repaint {
                redraw_pending = true;
            }

            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    let egui_output = app.update_ui(window);
                    app.egui_state
                        .handle_platform_output(window, egui_output.platform_output.clone());

                    if let Err(err) = app.render(egui_output) {
                        error!(%err, "render pass failed");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = app.resize(size.width, size.height) {
                        error!(%err, "surface resize failed");
                        elwt.exit();
                    }
                    redraw_pending = true;
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    if let Err(err) = app.resize(size.width, size.height) {
                        error!(%err, "surface resize failed");
                        elwt.exit();
                    }
                    redraw_pending = true;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if app.cursor_moved(*position) {
                        redraw_pending = true;
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if app.cursor_left() {
                        redraw_pending = true;
                    }
                }
                WindowEvent::MouseInput { state, button, .. } if !egui_consumed => {
                    if app.mouse_input(*state, *button) {
                        redraw_pending = true;
                    }
                }
                _ => {}
            }
        }
        Event::AboutToWait => {
            if redraw_pending {
                window.request_redraw();
            }

            // wake again when the notice has to disappear
            match app.session().notice_expires_at(Instant::now()) {
                Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
                None => elwt.set_control_flow(ControlFlow::Wait),
            }
        }
        Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
            redraw_pending = true;
        }
        _ => {}
    })?;

    Ok(())
}
