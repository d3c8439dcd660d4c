//! Even-odd scanline fill.

use crate::{mask::Mask, metrics::FontMetrics, outline::Outline};

/// Returns the sorted x coordinates where the horizontal line at `y`
/// crosses the outline.
///
/// A segment contributes when `p0.y < y <= p1.y` after ordering its
/// endpoints by `y`, so horizontal segments never contribute and a vertex
/// shared by two segments is counted once.
pub fn intercepts(outline: &Outline, y: f32) -> Vec<f32> {
    let mut xs: Vec<f32> = outline
        .segments()
        .iter()
        .map(|segment| segment.oriented())
        .filter(|s| s.p0.y < y && y <= s.p1.y)
        .map(|s| s.p0.x + (s.p1.x - s.p0.x) * ((y - s.p0.y) / (s.p1.y - s.p0.y)))
        .collect();
    xs.sort_by(f32::total_cmp);
    xs
}

/// Fills the interior of `outline` into a square supersampled mask.
///
/// The mask is `n x n` where `n` is [`FontMetrics::supersampled_size`].
/// Scanlines run over the integer `y` values from `descent * scale` to
/// `ascent * scale` and are flipped so that the ascender ends up at the top.
/// Each even/odd pair of intercepts covers the columns from the floor of
/// the first to the ceiling of the second, inclusive. An odd trailing
/// intercept is ignored.
pub fn fill(outline: &Outline, metrics: &FontMetrics, scale: f32) -> Mask {
    let n = metrics.supersampled_size(scale);
    let mut mask = Mask::new(n, n);
    if n == 0 {
        return mask;
    }
    let descent = metrics.descent as f32 * scale;
    let ascent = metrics.ascent as f32 * scale;
    let last_col = (n - 1) as f32;

    for y in descent as i32..=ascent.floor() as i32 {
        let row = n as f32 - y as f32 + descent;
        if row < 0.0 || row as usize >= n {
            continue;
        }
        let row = mask.row_mut(row as usize);
        let xs = intercepts(outline, y as f32);
        for span in xs.chunks_exact(2) {
            let x0 = span[0].floor().max(0.0);
            let x1 = span[1].ceil().min(last_col);
            if x0 > x1 {
                continue;
            }
            row[x0 as usize..=x1 as usize].fill(1.0);
        }
    }
    mask
}
