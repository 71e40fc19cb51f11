//! Background rendering for interactive exploration.
//!
//! The controller owns a single worker thread. Each submitted
//! [`RenderRequest`](data::render_request::RenderRequest) starts a new
//! generation and supersedes the one in flight; only frames from the latest
//! generation reach the presenter port.

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::render_request::RenderRequest;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::InteractiveControllerPresenterPort;
