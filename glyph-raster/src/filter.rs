//! Anti-aliasing filters applied to the supersampled mask.
//!
//! The horizontal pass spreads coverage across neighboring subpixels to
//! limit color fringing; the vertical pass averages three rows and
//! decimates the mask to output resolution.

use crate::{mask::Mask, SUPERSAMPLE};

/// Horizontal kernel weights, in units of 1/9, for offsets `-2..=2`.
const HORIZONTAL_WEIGHTS: [f32; 5] = [2.0, 1.0, 3.0, 1.0, 2.0];
const HORIZONTAL_NORM: f32 = 9.0;

/// Applies the 5-tap horizontal filter.
///
/// Only columns `2..width - 2` are written; the two columns at each edge
/// stay 0. The output has the same dimensions as the input.
pub fn blur_horizontal(mask: &Mask) -> Mask {
    let mut out = Mask::new(mask.width(), mask.height());
    if mask.width() < HORIZONTAL_WEIGHTS.len() {
        return out;
    }
    for (y, src) in mask.rows().enumerate() {
        let dst = out.row_mut(y);
        for (x, window) in src.windows(HORIZONTAL_WEIGHTS.len()).enumerate() {
            let sum: f32 = window
                .iter()
                .zip(HORIZONTAL_WEIGHTS)
                .map(|(value, weight)| value * weight)
                .sum();
            dst[x + 2] = sum / HORIZONTAL_NORM;
        }
    }
    out
}

/// Applies the 3-tap vertical box filter and downsamples by
/// [`SUPERSAMPLE`].
///
/// Rows above the first and below the last are treated as 0 and the sum is
/// still divided by 3, so the outermost rows come out darker. Every input
/// row `y` writes output row `y / 3`; the last of those writes is the one
/// that is kept. Any remainder rows beyond a multiple of 3 are dropped.
pub fn blur_vertical(mask: &Mask) -> Mask {
    let (width, height) = (mask.width(), mask.height());
    let mut out = Mask::new(width, height / SUPERSAMPLE);
    for y in 0..height {
        let target = y / SUPERSAMPLE;
        if target >= out.height() {
            break;
        }
        let lo = y.saturating_sub(1);
        let hi = (y + 1).min(height - 1);
        let dst = out.row_mut(target);
        for (x, value) in dst.iter_mut().enumerate() {
            let sum: f32 = (lo..=hi).map(|yy| mask[(yy, x)]).sum();
            *value = sum / 3.0;
        }
    }
    out
}
