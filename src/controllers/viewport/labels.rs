use crate::core::data::complex::Complex;
use std::fmt;

/// Rounds `value` to `decimals` places and prints it without trailing zeros.
/// Both signed zeros print as `"0"`.
#[must_use]
pub fn format_coordinate(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;

    if rounded == 0.0 {
        return "0".to_string();
    }

    rounded.to_string()
}

/// Display strings for a complex coordinate, as shown next to the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateLabels {
    pub x: String,
    pub y: String,
}

impl CoordinateLabels {
    /// What the viewer shows before the first zoom.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            x: "0".to_string(),
            y: "0".to_string(),
        }
    }

    #[must_use]
    pub fn for_point(point: Complex, decimals: u32) -> Self {
        Self {
            x: format_coordinate(point.real, decimals),
            y: format_coordinate(point.imag, decimals),
        }
    }

    #[must_use]
    pub fn x_text(&self) -> String {
        format!("X: {}", self.x)
    }

    #[must_use]
    pub fn y_text(&self) -> String {
        format!("Y: {}", self.y)
    }
}

impl Default for CoordinateLabels {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for CoordinateLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} Y: {}", self.x, self.y)
    }
}
