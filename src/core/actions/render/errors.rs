use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::render::evaluator_slot::EvaluatorError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    NotReady(EvaluatorError),
    Cancelled(Cancelled),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady(err) => write!(f, "cannot render: {}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotReady(err) => Some(err),
            Self::Cancelled(c) => Some(c),
        }
    }
}

impl From<Cancelled> for RenderError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl From<EvaluatorError> for RenderError {
    fn from(err: EvaluatorError) -> Self {
        Self::NotReady(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            RenderError::NotReady(EvaluatorError::NotReady).to_string(),
            "cannot render: escape evaluator is not ready yet"
        );
        assert_eq!(RenderError::Cancelled(Cancelled).to_string(), "render cancelled");
    }

    #[test]
    fn test_source_chains_to_cause() {
        let err = RenderError::from(EvaluatorError::NotReady);

        assert_eq!(
            err.source().map(ToString::to_string),
            Some("escape evaluator is not ready yet".to_string())
        );
    }
}
