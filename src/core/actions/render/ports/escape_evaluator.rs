use crate::core::data::escape_result::EscapeResult;

/// Classifies a point of the complex plane by escape-time iteration.
///
/// Any `Fn(real, imag, max_iterations) -> u32` closure is an evaluator, with a
/// raw result of `0` meaning the point never escaped.
pub trait EscapeEvaluator: Send + Sync {
    fn evaluate(&self, real: f64, imag: f64, max_iterations: u32) -> EscapeResult;
}

impl<F> EscapeEvaluator for F
where
    F: Fn(f64, f64, u32) -> u32 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, real: f64, imag: f64, max_iterations: u32) -> EscapeResult {
        EscapeResult::from(self(real, imag, max_iterations))
    }
}
