use crate::core::data::pixel_grid::PixelGrid;

/// RGBA, one byte per channel.
pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_grid_to_buffer_size(grid: PixelGrid) -> usize {
    grid.size() as usize * BYTES_PER_PIXEL
}

/// A complete RGBA frame, row-major with the origin at the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    grid: PixelGrid,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            grid,
            buffer: vec![0; pixel_grid_to_buffer_size(grid)],
        }
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }
}
