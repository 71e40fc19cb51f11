use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ZoomLimitReached,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomLimitReached => write!(f, "Zoom limit reached"),
        }
    }
}

/// A notice that clears itself once its lifetime has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientNotice {
    notice: Notice,
    raised_at: Instant,
    lifetime: Duration,
}

impl TransientNotice {
    #[must_use]
    pub fn raise(notice: Notice, now: Instant, lifetime: Duration) -> Self {
        Self {
            notice,
            raised_at: now,
            lifetime,
        }
    }

    #[must_use]
    pub fn notice(&self) -> Notice {
        self.notice
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) < self.lifetime
    }

    /// When the notice stops being active.
    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.raised_at + self.lifetime
    }
}
