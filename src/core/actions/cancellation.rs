use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// How many pixels a render worker may compute between cancellation polls.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Monotonic counter of submitted renders. Generation `0` means nothing has
/// been submitted yet.
#[derive(Debug, Default)]
pub struct RenderGenerations {
    latest: AtomicU64,
}

impl RenderGenerations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, superseding every earlier one.
    pub fn advance(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_latest(&self, generation: u64) -> bool {
        generation == self.latest()
    }

    /// A token that reports cancelled once a generation newer than
    /// `generation` has been started.
    #[must_use]
    pub fn token(&self, generation: u64) -> GenerationToken<'_> {
        GenerationToken {
            generations: self,
            generation,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    generations: &'a RenderGenerations,
    generation: u64,
}

impl GenerationToken<'_> {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.generations.latest.load(Ordering::Relaxed) != self.generation
    }
}
