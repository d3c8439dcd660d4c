//! Resolution of relative coordinates and smooth curve continuations.

use raster_types::Point;

use crate::{command::PathCommand, pen::OutlinePen};

/// Walks `commands` in order and emits the equivalent absolute drawing
/// calls to `pen`.
///
/// The cursor and the subpath start begin at the origin. An absolute move
/// starts a new subpath (`move_to`); a relative move only shifts the cursor
/// (`jump_to`), so a later close still returns to the last absolute move
/// target. Smooth curves reflect the most recent control point of
/// any curve command (quadratic or cubic) through the cursor; before the
/// first curve the cursor itself is used. Close path leaves the cursor
/// where it is, so later relative commands continue from the last drawn
/// point rather than from the subpath start.
pub fn trace(commands: &[PathCommand], pen: &mut impl OutlinePen) {
    let mut tracer = Tracer::default();
    for command in commands {
        tracer.apply(command, pen);
    }
}

#[derive(Default)]
struct Tracer {
    cursor: Point<f32>,
    last_control: Option<Point<f32>>,
}

impl Tracer {
    fn apply(&mut self, command: &PathCommand, pen: &mut impl OutlinePen) {
        let cursor = self.cursor;
        match *command {
            PathCommand::MoveAbs(to) => self.move_to(to, pen),
            PathCommand::MoveRel(delta) => self.jump_to(cursor + delta, pen),
            PathCommand::LineAbs(to) => self.line_to(to, pen),
            PathCommand::LineRel(delta) => self.line_to(cursor + delta, pen),
            PathCommand::HLineAbs(x) => self.line_to(Point::new(x, cursor.y), pen),
            PathCommand::HLineRel(dx) => self.line_to(Point::new(cursor.x + dx, cursor.y), pen),
            PathCommand::VLineAbs(y) => self.line_to(Point::new(cursor.x, y), pen),
            PathCommand::VLineRel(dy) => self.line_to(Point::new(cursor.x, cursor.y + dy), pen),
            PathCommand::QuadAbs { control, to } => self.quad_to(control, to, pen),
            PathCommand::QuadRel { control, to } => {
                self.quad_to(cursor + control, cursor + to, pen)
            }
            PathCommand::QuadSmoothAbs(to) => self.quad_to(self.reflected_control(), to, pen),
            PathCommand::QuadSmoothRel(delta) => {
                self.quad_to(self.reflected_control(), cursor + delta, pen)
            }
            PathCommand::CubicAbs {
                control0,
                control1,
                to,
            } => self.curve_to(control0, control1, to, pen),
            PathCommand::CubicRel {
                control0,
                control1,
                to,
            } => self.curve_to(cursor + control0, cursor + control1, cursor + to, pen),
            PathCommand::CubicSmoothAbs { control1, to } => {
                self.curve_to(self.reflected_control(), control1, to, pen)
            }
            PathCommand::CubicSmoothRel { control1, to } => self.curve_to(
                self.reflected_control(),
                cursor + control1,
                cursor + to,
                pen,
            ),
            PathCommand::ClosePath => pen.close(),
        }
    }

    fn reflected_control(&self) -> Point<f32> {
        self.last_control
            .map(|control| control.reflect(self.cursor))
            .unwrap_or(self.cursor)
    }

    fn move_to(&mut self, to: Point<f32>, pen: &mut impl OutlinePen) {
        pen.move_to(to);
        self.cursor = to;
    }

    fn jump_to(&mut self, to: Point<f32>, pen: &mut impl OutlinePen) {
        pen.jump_to(to);
        self.cursor = to;
    }

    fn line_to(&mut self, to: Point<f32>, pen: &mut impl OutlinePen) {
        pen.line_to(to);
        self.cursor = to;
    }

    fn quad_to(&mut self, control: Point<f32>, to: Point<f32>, pen: &mut impl OutlinePen) {
        pen.quad_to(control, to);
        self.last_control = Some(control);
        self.cursor = to;
    }

    fn curve_to(
        &mut self,
        control0: Point<f32>,
        control1: Point<f32>,
        to: Point<f32>,
        pen: &mut impl OutlinePen,
    ) {
        pen.curve_to(control0, control1, to);
        self.last_control = Some(control1);
        self.cursor = to;
    }
}
