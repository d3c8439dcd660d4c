use glyph_raster::{PathCommand, Point};
use skrifa::outline::OutlinePen;

/// Pen that records a design-unit outline as absolute path commands.
///
/// Contours from a font are always closed explicitly by the scaler, so
/// every `close` maps directly to [`PathCommand::ClosePath`].
#[derive(Clone, Default, Debug)]
pub struct CommandPen {
    commands: Vec<PathCommand>,
}

impl CommandPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }
}

impl OutlinePen for CommandPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveAbs(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineAbs(Point::new(x, y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadAbs {
            control: Point::new(cx0, cy0),
            to: Point::new(x, y),
        });
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CubicAbs {
            control0: Point::new(cx0, cy0),
            control1: Point::new(cx1, cy1),
            to: Point::new(x, y),
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }
}
