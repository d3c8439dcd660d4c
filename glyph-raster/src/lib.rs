//! Subpixel rasterizer for glyph outlines.
//!
//! Glyphs are described as sequences of SVG style [path commands](PathCommand)
//! in font design units. [`rasterize`] turns one of those sequences into a
//! square RGB bitmap:
//!
//! 1. the commands are [traced](trace) to absolute coordinates and
//!    [flattened](flatten) into line segments at three times the target
//!    resolution;
//! 2. the segments are [filled](scanline::fill) with the even-odd rule into a
//!    coverage [`Mask`];
//! 3. the mask is [blurred](filter) horizontally and vertically, which also
//!    reduces it to the target height;
//! 4. every output pixel takes its red, green and blue channels from three
//!    adjacent subpixel columns ([`compose`]).
//!
//! A [`GlyphCache`] holds the results for a whole character set.

#![forbid(unsafe_code)]

pub mod cache;
pub mod command;
pub mod compose;
pub mod filter;
pub mod flatten;
pub mod mask;
pub mod metrics;
pub mod outline;
pub mod pen;
pub mod pixels;
pub mod scanline;
mod trace;

pub use cache::{GlyphCache, Palette};
pub use command::{ParseError, PathCommand};
pub use mask::Mask;
pub use metrics::FontMetrics;
pub use outline::Outline;
pub use pen::OutlinePen;
pub use pixels::PixelBuffer;
pub use trace::trace;

#[doc(inline)]
pub use raster_types::{Point, Rgb};

/// Horizontal and vertical supersampling factor.
///
/// Also the number of color channels each output pixel is split into.
pub const SUPERSAMPLE: usize = 3;

/// Renders a glyph `target_height` pixels square in `color`.
///
/// The result is always exactly `target_height * target_height` pixels.
/// Degenerate input (an empty em square, a zero height, or an outline with
/// no area) produces a black bitmap.
pub fn rasterize(
    commands: &[PathCommand],
    metrics: &FontMetrics,
    target_height: u32,
    color: Rgb,
) -> PixelBuffer {
    if metrics.units_per_em == 0 || target_height == 0 {
        return PixelBuffer::new(target_height as usize);
    }
    let scale = metrics.scale_for_height(target_height);
    let outline = Outline::build(commands, scale);
    let mask = scanline::fill(&outline, metrics, scale);
    log::trace!(
        "{} commands, {} segments, {}x{} mask at scale {scale}",
        commands.len(),
        outline.len(),
        mask.width(),
        mask.height()
    );
    let blurred = filter::blur_vertical(&filter::blur_horizontal(&mask));
    compose::composite(&blurred, color, target_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<PathCommand> {
        PathCommand::parse_path("M0 0 H10 V10 H0 Z").unwrap()
    }

    #[test]
    fn buffer_is_always_square() {
        let _ = env_logger::builder().is_test(true).try_init();
        let metrics = FontMetrics::new(10, 10, 0);
        for h in [1, 2, 5, 9, 16, 48] {
            let buf = rasterize(&square(), &metrics, h, Rgb::WHITE);
            assert_eq!(buf.pixels().len(), (h * h) as usize, "h = {h}");
            assert_eq!(buf.size(), h as usize);
        }
    }

    #[test]
    fn degenerate_metrics() {
        let buf = rasterize(&square(), &FontMetrics::new(0, 10, 0), 6, Rgb::WHITE);
        assert_eq!(buf.pixels().len(), 36);
        assert!(buf.is_blank());
        let buf = rasterize(&square(), &FontMetrics::new(10, 10, 0), 0, Rgb::WHITE);
        assert!(buf.pixels().is_empty());
    }
}
