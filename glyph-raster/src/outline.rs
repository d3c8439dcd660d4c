//! Flattened, scaled glyph outlines.

use raster_types::Point;

use crate::{
    command::PathCommand,
    flatten::{flatten_cubic, flatten_quad, MAX_DEVIATION},
    pen::OutlinePen,
    trace::trace,
};

/// A straight edge in supersampled device space.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Segment {
    pub p0: Point<f32>,
    pub p1: Point<f32>,
}

impl Segment {
    pub const fn new(p0: Point<f32>, p1: Point<f32>) -> Self {
        Self { p0, p1 }
    }

    /// Returns the segment with its endpoints ordered by ascending `y`.
    pub fn oriented(self) -> Self {
        if self.p0.y > self.p1.y {
            Self::new(self.p1, self.p0)
        } else {
            self
        }
    }
}

/// A glyph outline reduced to line segments.
///
/// Subpaths are not tracked; for even-odd filling only the set of edges
/// matters.
#[derive(Clone, Default, Debug)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    /// Traces `commands` and flattens the result, multiplying every
    /// coordinate by `scale`.
    pub fn build(commands: &[PathCommand], scale: f32) -> Self {
        let mut builder = OutlineBuilder::new(scale);
        trace(commands, &mut builder);
        builder.finish()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<Segment>> for Outline {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

/// Pen that collects scaled line segments.
///
/// Input coordinates are in design units; curves are flattened with
/// [`MAX_DEVIATION`] before scaling.
#[derive(Clone, Debug)]
pub struct OutlineBuilder {
    scale: f32,
    cursor: Point<f32>,
    start: Point<f32>,
    segments: Vec<Segment>,
}

impl OutlineBuilder {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            cursor: Point::ZERO,
            start: Point::ZERO,
            segments: Vec::new(),
        }
    }

    pub fn finish(self) -> Outline {
        Outline {
            segments: self.segments,
        }
    }

    fn push(&mut self, p0: Point<f32>, p1: Point<f32>) {
        self.segments
            .push(Segment::new(p0 * self.scale, p1 * self.scale));
    }

    fn push_polyline(&mut self, points: &[Point<f32>]) {
        for pair in points.windows(2) {
            self.push(pair[0], pair[1]);
        }
    }
}

impl OutlinePen for OutlineBuilder {
    fn move_to(&mut self, to: Point<f32>) {
        self.cursor = to;
        self.start = to;
    }

    fn jump_to(&mut self, to: Point<f32>) {
        self.cursor = to;
    }

    fn line_to(&mut self, to: Point<f32>) {
        self.push(self.cursor, to);
        self.cursor = to;
    }

    fn quad_to(&mut self, control: Point<f32>, to: Point<f32>) {
        let points = flatten_quad(self.cursor, control, to, MAX_DEVIATION);
        self.push_polyline(&points);
        self.cursor = to;
    }

    fn curve_to(&mut self, control0: Point<f32>, control1: Point<f32>, to: Point<f32>) {
        let points = flatten_cubic(self.cursor, control0, control1, to, MAX_DEVIATION);
        self.push_polyline(&points);
        self.cursor = to;
    }

    fn close(&mut self) {
        self.push(self.cursor, self.start);
    }
}
