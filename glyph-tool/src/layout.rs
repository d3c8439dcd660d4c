//! Drawing text with pre-rendered glyphs.

use glyph_raster::{rasterize, GlyphCache, Palette, PixelBuffer};
use image::RgbImage;
use rayon::prelude::*;

use crate::source::GlyphSource;

/// Text drawn when no other input is given.
pub const DEMO_TEXT: &[&str] = &[
    "func heapify(a[], i, size) {",
    "  ls = (i << 1) + 1",
    "  rs = (i << 1) + 2",
    "  while (ls < size) {",
    "    k = ls",
    "    if (rs < size and a[rs] > a[ls])",
    "      k = rs",
    "    if (a[i] >= a[k])",
    "      break",
    "    swap(a[i], a[k])",
    "    i = k",
    "    ls = (i << 1) + 1",
    "    rs = (i << 1) + 2",
    "  }",
    "}",
];

/// Canvas and spacing for a rendered text block.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Offset of the first glyph from the top left corner.
    pub margin: u32,
    /// Horizontal advance as a fraction of the glyph height.
    pub advance_ratio: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1270,
            height: 720,
            margin: 10,
            advance_ratio: 0.6,
        }
    }
}

impl Layout {
    /// Pixels between the left edges of consecutive glyphs.
    pub fn advance(&self, glyph_height: u32) -> u32 {
        (glyph_height as f32 * self.advance_ratio) as u32
    }
}

/// Renders every glyph of `source` at `height` pixels.
///
/// Glyphs are rasterized in parallel; the resulting cache is read-only.
pub fn build_cache(source: &GlyphSource, height: u32, palette: &Palette) -> GlyphCache {
    let metrics = source.metrics();
    let glyphs: Vec<_> = source.glyphs().collect();
    let rendered: Vec<(char, PixelBuffer)> = glyphs
        .par_iter()
        .map(|(ch, commands)| {
            let color = palette.color_for(*ch);
            (*ch, rasterize(commands, metrics, height, color))
        })
        .collect();
    log::info!("rendered {} glyphs at {height}px", rendered.len());
    GlyphCache::from_glyphs(height, rendered)
}

/// Draws `lines` onto a black canvas, one line per glyph height.
///
/// Glyph cells overlap horizontally because the advance is narrower than
/// the cell; overlapping pixels keep the brighter value of each channel.
/// Characters missing from the cache leave their cell untouched and
/// anything falling outside the canvas is clipped.
pub fn render_text<S: AsRef<str>>(cache: &GlyphCache, lines: &[S], layout: &Layout) -> RgbImage {
    let mut canvas = RgbImage::new(layout.width, layout.height);
    let size = cache.height();
    let advance = layout.advance(size);
    for (line_ix, line) in lines.iter().enumerate() {
        let y = layout.margin as u64 + line_ix as u64 * size as u64;
        let mut x = layout.margin as u64;
        for ch in line.as_ref().chars() {
            if let Some(glyph) = cache.get(ch) {
                draw_glyph(&mut canvas, glyph, x, y);
            }
            x += advance as u64;
        }
    }
    canvas
}

fn draw_glyph(canvas: &mut RgbImage, glyph: &PixelBuffer, x0: u64, y0: u64) {
    let (width, height) = (canvas.width() as u64, canvas.height() as u64);
    for (dy, row) in glyph.pixels().chunks_exact(glyph.size().max(1)).enumerate() {
        let y = y0 + dy as u64;
        if y >= height {
            break;
        }
        for (dx, src) in row.iter().enumerate() {
            let x = x0 + dx as u64;
            if x >= width {
                break;
            }
            let dst = canvas.get_pixel_mut(x as u32, y as u32);
            for (channel, value) in dst.0.iter_mut().zip(src.to_array()) {
                *channel = (*channel).max(value);
            }
        }
    }
}
