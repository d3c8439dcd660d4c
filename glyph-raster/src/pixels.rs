//! Rendered glyph bitmaps.

use raster_types::Rgb;

/// Square RGB bitmap, row-major from top to bottom.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct PixelBuffer {
    size: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Creates a black `size x size` buffer.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            pixels: vec![Rgb::BLACK; size * size],
        }
    }

    /// Width and height in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Returns the pixel at column `x` of row `y`, or `None` if out of
    /// bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.size {
            return None;
        }
        self.pixels.get(y * self.size + x).copied()
    }

    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.size;
        &self.pixels[start..start + self.size]
    }

    /// Number of bytes per row in [`as_bytes`](Self::as_bytes).
    pub fn stride(&self) -> usize {
        self.size * 3
    }

    /// The pixels as packed RGB24 data.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Returns true if every pixel is black.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|px| *px == Rgb::BLACK)
    }
}
