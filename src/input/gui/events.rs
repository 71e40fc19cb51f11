/// User events posted to the GUI event loop from background threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter adapter.
    ///
    /// Does not redraw by itself; the handler requests a redraw once it has
    /// looked at what arrived.
    Wake,
    /// The escape evaluator has been installed and renders can start.
    EvaluatorReady,
}
