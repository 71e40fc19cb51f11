pub mod controller;
pub mod labels;
pub mod notice;

pub use controller::{
    ViewportController, ViewportError, ZoomDirection, ZoomLimitReached, ZoomOutcome,
    ZoomTransition,
};
pub use labels::CoordinateLabels;
pub use notice::{Notice, TransientNotice};
