use std::num::NonZeroU32;

/// Classification of a single point after escape-time iteration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeResult {
    /// Never escaped within the iteration budget.
    InSet,
    /// Escaped on the given iteration.
    Escaped(NonZeroU32),
}

impl EscapeResult {
    /// Raw count with `0` standing for [`EscapeResult::InSet`].
    #[must_use]
    pub fn raw(self) -> u32 {
        match self {
            Self::InSet => 0,
            Self::Escaped(iterations) => iterations.get(),
        }
    }
}

impl From<u32> for EscapeResult {
    fn from(raw: u32) -> Self {
        match NonZeroU32::new(raw) {
            Some(iterations) => Self::Escaped(iterations),
            None => Self::InSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_in_set() {
        assert_eq!(EscapeResult::from(0u32), EscapeResult::InSet);
        assert_eq!(EscapeResult::InSet.raw(), 0);
    }

    #[test]
    fn test_positive_counts_escape() {
        let result = EscapeResult::from(42u32);

        assert!(matches!(result, EscapeResult::Escaped(n) if n.get() == 42));
        assert_eq!(result.raw(), 42);
    }
}
