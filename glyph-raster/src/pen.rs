//! Types for collecting the output when tracing a glyph's path commands.
//!
//! Tracing resolves relative coordinates and smooth curve continuations, so
//! a pen only ever sees absolute positions in font design units.

use core::fmt::{self, Write};

use raster_types::Point;

/// Interface for accepting a sequence of absolute path commands.
pub trait OutlinePen {
    /// Begin a new subpath at `to`.
    fn move_to(&mut self, to: Point<f32>);

    /// Move the current point to `to` without starting a new subpath.
    ///
    /// A later [`close`](Self::close) still returns to the point given to
    /// the most recent [`move_to`](Self::move_to).
    fn jump_to(&mut self, to: Point<f32>);

    /// Line segment from the current point to `to`.
    fn line_to(&mut self, to: Point<f32>);

    /// Quadratic bezier from the current point with a control point at
    /// `control`, ending at `to`.
    fn quad_to(&mut self, control: Point<f32>, to: Point<f32>);

    /// Cubic bezier from the current point with control points `control0`
    /// and `control1`, ending at `to`.
    fn curve_to(&mut self, control0: Point<f32>, control1: Point<f32>, to: Point<f32>);

    /// Close the current subpath.
    fn close(&mut self);
}

impl<P: OutlinePen + ?Sized> OutlinePen for &mut P {
    fn move_to(&mut self, to: Point<f32>) {
        (**self).move_to(to)
    }

    fn jump_to(&mut self, to: Point<f32>) {
        (**self).jump_to(to)
    }

    fn line_to(&mut self, to: Point<f32>) {
        (**self).line_to(to)
    }

    fn quad_to(&mut self, control: Point<f32>, to: Point<f32>) {
        (**self).quad_to(control, to)
    }

    fn curve_to(&mut self, control0: Point<f32>, control1: Point<f32>, to: Point<f32>) {
        (**self).curve_to(control0, control1, to)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Single element of a resolved (absolute) path.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathElement {
    MoveTo(Point<f32>),
    JumpTo(Point<f32>),
    LineTo(Point<f32>),
    QuadTo {
        control: Point<f32>,
        to: Point<f32>,
    },
    CurveTo {
        control0: Point<f32>,
        control1: Point<f32>,
        to: Point<f32>,
    },
    Close,
}

impl OutlinePen for Vec<PathElement> {
    fn move_to(&mut self, to: Point<f32>) {
        self.push(PathElement::MoveTo(to))
    }

    fn jump_to(&mut self, to: Point<f32>) {
        self.push(PathElement::JumpTo(to))
    }

    fn line_to(&mut self, to: Point<f32>) {
        self.push(PathElement::LineTo(to))
    }

    fn quad_to(&mut self, control: Point<f32>, to: Point<f32>) {
        self.push(PathElement::QuadTo { control, to })
    }

    fn curve_to(&mut self, control0: Point<f32>, control1: Point<f32>, to: Point<f32>) {
        self.push(PathElement::CurveTo {
            control0,
            control1,
            to,
        })
    }

    fn close(&mut self) {
        self.push(PathElement::Close)
    }
}

/// Pen that writes path data in the same syntax accepted by
/// [`PathCommand::parse_path`](crate::PathCommand::parse_path).
///
/// Everything is written in absolute form except [`OutlinePen::jump_to`],
/// which becomes a relative `m` so that reparsing keeps the subpath start.
#[derive(Clone, Default, Debug)]
pub struct SvgPen {
    data: String,
    precision: Option<usize>,
    current: Point<f32>,
}

impl SvgPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pen that prints `precision` digits after the decimal point.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: Some(precision),
            ..Self::default()
        }
    }

    fn command(&mut self, letter: char, points: &[Point<f32>]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(letter);
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                self.data.push(' ');
            }
            let _ = match self.precision {
                Some(prec) => write!(self.data, "{:.prec$} {:.prec$}", point.x, point.y),
                None => write!(self.data, "{} {}", point.x, point.y),
            };
        }
    }
}

impl OutlinePen for SvgPen {
    fn move_to(&mut self, to: Point<f32>) {
        self.command('M', &[to]);
        self.current = to;
    }

    fn jump_to(&mut self, to: Point<f32>) {
        self.command('m', &[to - self.current]);
        self.current = to;
    }

    fn line_to(&mut self, to: Point<f32>) {
        self.command('L', &[to]);
        self.current = to;
    }

    fn quad_to(&mut self, control: Point<f32>, to: Point<f32>) {
        self.command('Q', &[control, to]);
        self.current = to;
    }

    fn curve_to(&mut self, control0: Point<f32>, control1: Point<f32>, to: Point<f32>) {
        self.command('C', &[control0, control1, to]);
        self.current = to;
    }

    fn close(&mut self) {
        self.command('Z', &[]);
    }
}

impl AsRef<str> for SvgPen {
    fn as_ref(&self) -> &str {
        &self.data
    }
}

impl From<SvgPen> for String {
    fn from(value: SvgPen) -> Self {
        value.data
    }
}

impl fmt::Display for SvgPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(pen: &mut impl OutlinePen) {
        pen.move_to(Point::new(1.0, 2.45556));
        pen.line_to(Point::new(1.2, 4.0));
        pen.quad_to(Point::new(2.0345, 3.56789), Point::new(-0.157, -425.07));
        pen.curve_to(
            Point::new(-37.0010, 4.5),
            Point::new(2.0, 1.0),
            Point::new(-0.5, -0.25),
        );
        pen.close();
    }

    #[test]
    fn svg_pen_precision() {
        let svg_data = [None, Some(1), Some(4)].map(|prec| {
            let mut pen = match prec {
                None => SvgPen::new(),
                Some(prec) => SvgPen::with_precision(prec),
            };
            draw(&mut pen);
            pen.to_string()
        });
        let expected = [
            "M1 2.45556 L1.2 4 Q2.0345 3.56789 -0.157 -425.07 C-37.001 4.5 2 1 -0.5 -0.25 Z",
            "M1.0 2.5 L1.2 4.0 Q2.0 3.6 -0.2 -425.1 C-37.0 4.5 2.0 1.0 -0.5 -0.2 Z",
            "M1.0000 2.4556 L1.2000 4.0000 Q2.0345 3.5679 -0.1570 -425.0700 C-37.0010 4.5000 2.0000 1.0000 -0.5000 -0.2500 Z",
        ];
        for (result, expected) in svg_data.iter().zip(&expected) {
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn recording_pen_through_reference() {
        let mut recording = vec![];
        draw(&mut &mut recording);
        assert_eq!(recording.len(), 5);
        assert_eq!(recording[0], PathElement::MoveTo(Point::new(1.0, 2.45556)));
        assert_eq!(recording[4], PathElement::Close);
    }

    #[test]
    fn svg_pen_writes_jumps_as_relative_moves() {
        let mut pen = SvgPen::new();
        pen.move_to(Point::new(1.0, 1.0));
        pen.line_to(Point::new(4.0, 1.0));
        pen.close();
        pen.jump_to(Point::new(6.0, 3.0));
        pen.line_to(Point::new(7.0, 3.0));
        assert_eq!(pen.to_string(), "M1 1 L4 1 Z m2 2 L7 3");
    }
}
