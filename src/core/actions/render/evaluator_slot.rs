use crate::core::actions::render::ports::escape_evaluator::EscapeEvaluator;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorError {
    NotReady,
    AlreadyInstalled,
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "escape evaluator is not ready yet"),
            Self::AlreadyInstalled => write!(f, "escape evaluator is already installed"),
        }
    }
}

impl Error for EvaluatorError {}

/// Holds the escape evaluator once it has been loaded. Renders fail fast with
/// [`EvaluatorError::NotReady`] until [`install`](Self::install) is called.
#[derive(Default)]
pub struct EvaluatorSlot {
    evaluator: OnceLock<Arc<dyn EscapeEvaluator>>,
}

impl EvaluatorSlot {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ready(evaluator: Arc<dyn EscapeEvaluator>) -> Self {
        let slot = Self::empty();
        // A fresh slot cannot already be filled.
        let _ = slot.evaluator.set(evaluator);
        slot
    }

    pub fn install(&self, evaluator: Arc<dyn EscapeEvaluator>) -> Result<(), EvaluatorError> {
        self.evaluator
            .set(evaluator)
            .map_err(|_| EvaluatorError::AlreadyInstalled)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.evaluator.get().is_some()
    }

    pub fn get(&self) -> Result<&Arc<dyn EscapeEvaluator>, EvaluatorError> {
        self.evaluator.get().ok_or(EvaluatorError::NotReady)
    }
}

impl fmt::Debug for EvaluatorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluatorSlot")
            .field("ready", &self.is_ready())
            .finish()
    }
}
