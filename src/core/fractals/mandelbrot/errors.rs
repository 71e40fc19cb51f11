use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotConfigError {
    ZeroMaxIterations,
    EvenGridDimension { width: u32, height: u32 },
    ViewLargerThanBounds { width: u32, height: u32 },
    ZeroNoticeDuration,
    LabelDecimalsTooLarge { decimals: u32, max: u32 },
}

impl fmt::Display for MandelbrotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::EvenGridDimension { width, height } => {
                write!(
                    f,
                    "pixel grid must have odd width and height to have a center pixel: {}x{}",
                    width, height
                )
            }
            Self::ViewLargerThanBounds { width, height } => {
                write!(
                    f,
                    "a {}x{} grid at the widest zoom does not fit inside the fractal bounds",
                    width, height
                )
            }
            Self::ZeroNoticeDuration => {
                write!(f, "notice duration must be greater than zero")
            }
            Self::LabelDecimalsTooLarge { decimals, max } => {
                write!(
                    f,
                    "label precision of {} decimals exceeds the maximum of {}",
                    decimals, max
                )
            }
        }
    }
}

impl Error for MandelbrotConfigError {}
