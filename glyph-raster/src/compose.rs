//! Subpixel channel compositing.

use raster_types::Rgb;

use crate::{mask::Mask, pixels::PixelBuffer, SUPERSAMPLE};

/// Builds a `size x size` bitmap from a blurred, vertically decimated mask.
///
/// Output pixel `(x, y)` takes its red, green and blue coverage from
/// columns `3x`, `3x + 1` and `3x + 2` of mask row `y`, each scaled by the
/// matching channel of `color` and truncated. Pixels with no complete
/// triple in the mask stay black.
pub fn composite(blur: &Mask, color: Rgb, size: u32) -> PixelBuffer {
    let size = size as usize;
    let mut out = PixelBuffer::new(size);
    let rows = size.min(blur.height());
    let columns = size.min(blur.width() / SUPERSAMPLE);
    for y in 0..rows {
        let src = blur.row(y);
        let dst = &mut out.pixels_mut()[y * size..][..columns];
        for (pixel, coverage) in dst.iter_mut().zip(src.chunks_exact(SUPERSAMPLE)) {
            *pixel = Rgb::new(
                channel(coverage[0], color.r),
                channel(coverage[1], color.g),
                channel(coverage[2], color.b),
            );
        }
    }
    out
}

// float to int casts saturate, so coverage outside [0, 1] clamps instead of
// wrapping
fn channel(coverage: f32, value: u8) -> u8 {
    (coverage * value as f32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_staggered() {
        // a step from 0 to 1 between subpixel columns 4 and 5
        let mut step = Mask::new(9, 1);
        for x in 5..9 {
            step[(0, x)] = 1.0;
        }
        let out = composite(&step, Rgb::WHITE, 3);
        assert_eq!(out.get(0, 0), Some(Rgb::BLACK));
        assert_eq!(out.get(1, 0), Some(Rgb::new(0, 0, 255)));
        assert_eq!(out.get(2, 0), Some(Rgb::WHITE));
        // rows without mask data stay black
        assert!(out.row(1).iter().all(|px| *px == Rgb::BLACK));
    }

    #[test]
    fn color_scales_channels() {
        let mut mask = Mask::new(3, 1);
        mask.row_mut(0).copy_from_slice(&[1.0, 0.5, 2.0 / 3.0]);
        let out = composite(&mask, Rgb::new(200, 100, 255), 1);
        assert_eq!(out.pixels(), &[Rgb::new(200, 50, 170)]);
        let out = composite(&mask, Rgb::YELLOW, 1);
        assert_eq!(out.pixels(), &[Rgb::new(255, 127, 0)]);
    }

    #[test]
    fn incomplete_triples_are_skipped() {
        let mut mask = Mask::new(5, 2);
        mask.row_mut(0).fill(1.0);
        mask.row_mut(1).fill(1.0);
        let out = composite(&mask, Rgb::WHITE, 2);
        assert_eq!(out.row(0), &[Rgb::WHITE, Rgb::BLACK]);
        assert_eq!(out.row(1), &[Rgb::WHITE, Rgb::BLACK]);
    }

    #[test]
    fn out_of_range_coverage_saturates() {
        let mask = Mask::from_rows(&[[1.5, -0.5, f32::NAN]]).unwrap();
        let out = composite(&mask, Rgb::WHITE, 1);
        assert_eq!(out.pixels(), &[Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn empty_mask_is_black() {
        let out = composite(&Mask::new(0, 0), Rgb::WHITE, 4);
        assert_eq!(out.pixels().len(), 16);
        assert!(out.is_blank());
    }
}
