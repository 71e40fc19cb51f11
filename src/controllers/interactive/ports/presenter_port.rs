use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives finished renders from the background worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
