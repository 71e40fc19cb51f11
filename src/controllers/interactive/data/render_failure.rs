use crate::core::actions::render::errors::RenderError;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFailure {
    pub generation: u64,
    pub error: RenderError,
}
