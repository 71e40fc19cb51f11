use crate::core::data::pixel_buffer::PixelBuffer;
use std::io;
use std::path::Path;

/// Writes a finished frame to disk in one image format.
pub trait FilePresenterPort {
    /// Extension used when the caller's path has none, without the dot.
    fn extension(&self) -> &'static str;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()>;
}
