use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes frames as binary Netpbm PAM images, keeping the alpha channel.
#[derive(Debug, Default)]
pub struct PamFilePresenter {}

impl PamFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
        let grid = buffer.grid();

        // P7 with four one-byte channels per pixel
        writeln!(writer, "P7")?;
        writeln!(writer, "WIDTH {}", grid.width())?;
        writeln!(writer, "HEIGHT {}", grid.height())?;
        writeln!(writer, "DEPTH 4")?;
        writeln!(writer, "MAXVAL 255")?;
        writeln!(writer, "TUPLTYPE RGB_ALPHA")?;
        writeln!(writer, "ENDHDR")?;
        writer.write_all(buffer.buffer())?;

        Ok(())
    }
}

impl FilePresenterPort for PamFilePresenter {
    fn extension(&self) -> &'static str {
        "pam"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(fs::File::create(filepath)?);
        Self::encode(buffer, &mut writer)?;
        writer.flush()?;

        debug!(path = %filepath.display(), bytes = buffer.buffer_size(), "wrote PAM image");

        Ok(())
    }
}
