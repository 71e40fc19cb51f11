use crate::controllers::viewport::controller::ZoomDirection;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::DEFAULT_MAX_ITERATIONS;
use clap::Parser;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "output/mandelbrot.pam";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub direction: ZoomDirection,
    pub pixel: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickParseError {
    UnknownDirection { value: String },
    MalformedPixel { value: String },
}

impl fmt::Display for ClickParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection { value } => {
                write!(f, "'{}' must start with in: or out:", value)
            }
            Self::MalformedPixel { value } => {
                write!(f, "'{}' must end in a pixel X,Y", value)
            }
        }
    }
}

impl Error for ClickParseError {}

/// Render the Mandelbrot view reached by a sequence of clicks.
///
/// Example:
///   mandelbrot_viewer --output deep.pam in:800,400 in:1200,100
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mandelbrot_viewer", version, after_help = "Log filter: RUST_LOG (default: info)")]
pub struct CliArgs {
    /// Where to write the PAM image
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Escape-time budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Clicks replayed in order: in:X,Y zooms in and out:X,Y zooms out,
    /// centred on pixel (X, Y)
    #[arg(value_name = "CLICK", value_parser = parse_click)]
    pub clicks: Vec<Click>,
}

pub fn parse_click(value: &str) -> Result<Click, ClickParseError> {
    let (direction, coords) = if let Some(coords) = value.strip_prefix("in:") {
        (ZoomDirection::In, coords)
    } else if let Some(coords) = value.strip_prefix("out:") {
        (ZoomDirection::Out, coords)
    } else {
        return Err(ClickParseError::UnknownDirection {
            value: value.to_string(),
        });
    };

    let malformed = || ClickParseError::MalformedPixel {
        value: value.to_string(),
    };
    let (x, y) = coords.split_once(',').ok_or_else(malformed)?;
    let x = x.trim().parse().map_err(|_| malformed())?;
    let y = y.trim().parse().map_err(|_| malformed())?;

    Ok(Click {
        direction,
        pixel: Point::new(x, y),
    })
}
