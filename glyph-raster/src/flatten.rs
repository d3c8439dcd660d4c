//! Piecewise linear approximation of bezier curves.
//!
//! The number of segments does not adapt to curve length or curvature; it
//! is derived once from a single tolerance constant so that every curve in
//! every glyph is sampled the same way.

use raster_types::Point;

/// Tolerance used when tracing glyph outlines.
pub const MAX_DEVIATION: f32 = 0.1;

/// Number of line segments used to approximate one curve:
/// `ceil(1 / tolerance)`.
///
/// A non-positive or non-finite tolerance falls back to a single segment.
pub fn segment_count(tolerance: f32) -> usize {
    let count = (1.0 / tolerance).ceil();
    if count.is_finite() && count >= 1.0 {
        count as usize
    } else {
        1
    }
}

/// Flattens the quadratic bezier `p0, p1, p2`.
///
/// Returns `segment_count(tolerance) + 1` points, the first at `t = 0` and
/// the last at `t = 1`.
pub fn flatten_quad(
    p0: Point<f32>,
    p1: Point<f32>,
    p2: Point<f32>,
    tolerance: f32,
) -> Vec<Point<f32>> {
    sample(segment_count(tolerance), |t| {
        let q0 = p0.lerp(p1, t);
        let q1 = p1.lerp(p2, t);
        q0.lerp(q1, t)
    })
}

/// Flattens the cubic bezier `p0, p1, p2, p3`.
pub fn flatten_cubic(
    p0: Point<f32>,
    p1: Point<f32>,
    p2: Point<f32>,
    p3: Point<f32>,
    tolerance: f32,
) -> Vec<Point<f32>> {
    sample(segment_count(tolerance), |t| {
        let q0 = p0.lerp(p1, t);
        let q1 = p1.lerp(p2, t);
        let q2 = p2.lerp(p3, t);
        let c0 = q0.lerp(q1, t);
        let c1 = q1.lerp(q2, t);
        c0.lerp(c1, t)
    })
}

fn sample(segments: usize, eval: impl Fn(f32) -> Point<f32>) -> Vec<Point<f32>> {
    (0..=segments)
        .map(|i| eval(i as f32 / segments as f32))
        .collect()
}
