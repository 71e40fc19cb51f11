use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_failure::RenderFailure;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::{CancelToken, RenderGenerations};
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::renderer::Renderer;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{info, trace, warn};

struct SharedState {
    generations: RenderGenerations,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    renderer: Renderer,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        renderer: Renderer,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generations: RenderGenerations::new(),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            renderer,
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request` as the newest generation. Any render still running for
    /// an older generation stops at its next cancellation poll.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generations.advance();

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.shared.generations.latest()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    /// True while the newest submitted generation has neither produced a
    /// frame nor failed.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.last_completed_generation() < self.latest_generation()
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let generation_token = shared.generations.token(job_generation);
            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed) || generation_token.is_cancelled()
            };

            let start = Instant::now();
            let result = shared
                .renderer
                .render(request.viewport, request.step, &cancel_token);
            let render_duration = start.elapsed();

            if !shared.generations.is_latest(job_generation) {
                trace!(generation = job_generation, "discarding superseded render");
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => {
                    info!(
                        generation = job_generation,
                        duration_ms = render_duration.as_millis() as u64,
                        "render complete"
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        request,
                        pixel_buffer,
                        render_duration,
                    })
                }
                Err(RenderError::Cancelled(_)) => {
                    trace!(generation = job_generation, "render cancelled");
                    continue;
                }
                Err(error) => {
                    warn!(generation = job_generation, %error, "render failed");

                    RenderEvent::Error(RenderFailure {
                        generation: job_generation,
                        error,
                    })
                }
            };

            // visible before the presenter wakes anyone
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
            shared.presenter_port.present(event);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
