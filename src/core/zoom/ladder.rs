use std::error::Error;
use std::fmt;

/// Number of rungs on the zoom ladder.
pub const ZOOM_LEVELS: u32 = 40;

/// Step sizes of the first decade; every further decade divides them by ten.
const BASE_STEPS: [f64; 3] = [0.0025, 0.001, 0.0005];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomIndexError {
    OutOfRange { requested: i64 },
}

impl fmt::Display for ZoomIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { requested } => {
                write!(
                    f,
                    "zoom index {} outside of 0..={}",
                    requested,
                    ZOOM_LEVELS - 1
                )
            }
        }
    }
}

impl Error for ZoomIndexError {}

/// Position on the zoom ladder. Only values in `0..ZOOM_LEVELS` can be built,
/// so [`step_size`] never sees an invalid index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ZoomIndex(u32);

impl ZoomIndex {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(ZOOM_LEVELS - 1);

    pub fn new(index: u32) -> Result<Self, ZoomIndexError> {
        if index >= ZOOM_LEVELS {
            return Err(ZoomIndexError::OutOfRange {
                requested: i64::from(index),
            });
        }

        Ok(Self(index))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Moves `delta` rungs along the ladder, rejecting anything past either end.
    pub fn offset(self, delta: i32) -> Result<Self, ZoomIndexError> {
        let requested = i64::from(self.0) + i64::from(delta);

        u32::try_from(requested)
            .map_err(|_| ZoomIndexError::OutOfRange { requested })
            .and_then(Self::new)
    }

    #[must_use]
    pub fn step_size(self) -> f64 {
        step_size(self)
    }
}

impl fmt::Display for ZoomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complex-plane distance covered by one pixel at `index`.
#[must_use]
pub fn step_size(index: ZoomIndex) -> f64 {
    let base = BASE_STEPS[(index.0 % 3) as usize];
    let decade = (index.0 / 3) as i32;

    base / 10f64.powi(decade)
}
