use crate::core::data::viewport::Viewport;

/// Immutable snapshot of the view a render job draws. `PartialEq` lets
/// callers skip submitting the view that is already on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub step: f64,
}
