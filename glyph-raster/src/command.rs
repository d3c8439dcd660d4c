//! Drawing instructions for a single glyph.
//!
//! Glyph outlines arrive as SVG style path data: a command letter followed
//! by a fixed number of numeric arguments. Uppercase letters take absolute
//! coordinates and lowercase letters take coordinates relative to the
//! current point.

use core::{fmt, ops::Range};

use raster_types::Point;

/// One drawing instruction.
///
/// Each variant carries exactly the coordinates its letter consumes, so a
/// horizontal line only stores an x value and a close path stores nothing.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathCommand {
    /// `M x y`
    MoveAbs(Point<f32>),
    /// `m dx dy`
    MoveRel(Point<f32>),
    /// `L x y`
    LineAbs(Point<f32>),
    /// `l dx dy`
    LineRel(Point<f32>),
    /// `H x`
    HLineAbs(f32),
    /// `h dx`
    HLineRel(f32),
    /// `V y`
    VLineAbs(f32),
    /// `v dy`
    VLineRel(f32),
    /// `Q cx cy x y`
    QuadAbs { control: Point<f32>, to: Point<f32> },
    /// `q dcx dcy dx dy`
    QuadRel { control: Point<f32>, to: Point<f32> },
    /// `T x y`
    QuadSmoothAbs(Point<f32>),
    /// `t dx dy`
    QuadSmoothRel(Point<f32>),
    /// `C cx0 cy0 cx1 cy1 x y`
    CubicAbs {
        control0: Point<f32>,
        control1: Point<f32>,
        to: Point<f32>,
    },
    /// `c dcx0 dcy0 dcx1 dcy1 dx dy`
    CubicRel {
        control0: Point<f32>,
        control1: Point<f32>,
        to: Point<f32>,
    },
    /// `S cx1 cy1 x y`
    CubicSmoothAbs { control1: Point<f32>, to: Point<f32> },
    /// `s dcx1 dcy1 dx dy`
    CubicSmoothRel { control1: Point<f32>, to: Point<f32> },
    /// `Z` or `z`
    ClosePath,
}

impl PathCommand {
    /// Parses a complete path data string.
    ///
    /// Every command letter must be followed by exactly the number of
    /// arguments it takes; implicit repetition of the previous command is
    /// not supported. Parsing is all or nothing.
    pub fn parse_path(src: &str) -> Result<Vec<PathCommand>, ParseError> {
        let mut lexer = Lexer { src, pos: 0 };
        let mut commands = Vec::new();
        while let Some((offset, letter)) = lexer.next_letter() {
            let arity = arity(letter).ok_or(ParseError::UnknownCommand {
                command: letter,
                offset,
            })?;
            let mut args = [0f32; 6];
            for (found, arg) in args.iter_mut().take(arity).enumerate() {
                *arg = lexer.number().map_err(|e| match e {
                    NumberError::Missing => ParseError::MissingArgument {
                        command: letter,
                        offset,
                        expected: arity,
                        found,
                    },
                    NumberError::Invalid(at) => ParseError::InvalidNumber { offset: at },
                })?;
            }
            commands.push(Self::from_args(letter, &args));
        }
        Ok(commands)
    }

    fn from_args(letter: char, args: &[f32; 6]) -> Self {
        let p = |i: usize| Point::new(args[i], args[i + 1]);
        match letter {
            'M' => Self::MoveAbs(p(0)),
            'm' => Self::MoveRel(p(0)),
            'L' => Self::LineAbs(p(0)),
            'l' => Self::LineRel(p(0)),
            'H' => Self::HLineAbs(args[0]),
            'h' => Self::HLineRel(args[0]),
            'V' => Self::VLineAbs(args[0]),
            'v' => Self::VLineRel(args[0]),
            'Q' => Self::QuadAbs {
                control: p(0),
                to: p(2),
            },
            'q' => Self::QuadRel {
                control: p(0),
                to: p(2),
            },
            'T' => Self::QuadSmoothAbs(p(0)),
            't' => Self::QuadSmoothRel(p(0)),
            'C' => Self::CubicAbs {
                control0: p(0),
                control1: p(2),
                to: p(4),
            },
            'c' => Self::CubicRel {
                control0: p(0),
                control1: p(2),
                to: p(4),
            },
            'S' => Self::CubicSmoothAbs {
                control1: p(0),
                to: p(2),
            },
            's' => Self::CubicSmoothRel {
                control1: p(0),
                to: p(2),
            },
            _ => Self::ClosePath,
        }
    }

    /// The path data letter for this command.
    pub fn letter(&self) -> char {
        match self {
            Self::MoveAbs(_) => 'M',
            Self::MoveRel(_) => 'm',
            Self::LineAbs(_) => 'L',
            Self::LineRel(_) => 'l',
            Self::HLineAbs(_) => 'H',
            Self::HLineRel(_) => 'h',
            Self::VLineAbs(_) => 'V',
            Self::VLineRel(_) => 'v',
            Self::QuadAbs { .. } => 'Q',
            Self::QuadRel { .. } => 'q',
            Self::QuadSmoothAbs(_) => 'T',
            Self::QuadSmoothRel(_) => 't',
            Self::CubicAbs { .. } => 'C',
            Self::CubicRel { .. } => 'c',
            Self::CubicSmoothAbs { .. } => 'S',
            Self::CubicSmoothRel { .. } => 's',
            Self::ClosePath => 'Z',
        }
    }

    /// Arguments in path data order; only the first `arity` are meaningful.
    fn args(&self) -> [f32; 6] {
        match *self {
            Self::MoveAbs(p)
            | Self::MoveRel(p)
            | Self::LineAbs(p)
            | Self::LineRel(p)
            | Self::QuadSmoothAbs(p)
            | Self::QuadSmoothRel(p) => [p.x, p.y, 0.0, 0.0, 0.0, 0.0],
            Self::HLineAbs(v) | Self::HLineRel(v) | Self::VLineAbs(v) | Self::VLineRel(v) => {
                [v, 0.0, 0.0, 0.0, 0.0, 0.0]
            }
            Self::QuadAbs { control, to }
            | Self::QuadRel { control, to }
            | Self::CubicSmoothAbs {
                control1: control,
                to,
            }
            | Self::CubicSmoothRel {
                control1: control,
                to,
            } => [control.x, control.y, to.x, to.y, 0.0, 0.0],
            Self::CubicAbs {
                control0,
                control1,
                to,
            }
            | Self::CubicRel {
                control0,
                control1,
                to,
            } => [
                control0.x, control0.y, control1.x, control1.y, to.x, to.y,
            ],
            Self::ClosePath => [0.0; 6],
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        write!(f, "{letter}")?;
        let count = arity(letter).unwrap_or_default();
        for (i, value) in self.args()[..count].iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Number of numeric arguments consumed by each command letter.
fn arity(letter: char) -> Option<usize> {
    Some(match letter.to_ascii_uppercase() {
        'M' | 'L' | 'T' => 2,
        'H' | 'V' => 1,
        'Q' | 'S' => 4,
        'C' => 6,
        'Z' => 0,
        _ => return None,
    })
}

/// Errors that can occur when parsing path data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A character in command position is not a known command letter.
    #[error("unknown path command '{command}' at offset {offset}")]
    UnknownCommand { command: char, offset: usize },
    /// The data ended, or another command began, before all arguments of
    /// the command at `offset` were read.
    #[error(
        "path command '{command}' at offset {offset} takes {expected} arguments but only {found} were given"
    )]
    MissingArgument {
        command: char,
        offset: usize,
        expected: usize,
        found: usize,
    },
    /// Something that starts like a number but cannot be read as one.
    #[error("malformed number at offset {offset}")]
    InvalidNumber { offset: usize },
}

impl ParseError {
    /// Byte range of the offending input.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::UnknownCommand { command, offset }
            | Self::MissingArgument {
                command, offset, ..
            } => *offset..*offset + command.len_utf8(),
            Self::InvalidNumber { offset } => *offset..*offset + 1,
        }
    }
}

enum NumberError {
    Missing,
    Invalid(usize),
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl Lexer<'_> {
    fn skip_separators(&mut self) {
        let rest = &self.src[self.pos..];
        let trimmed = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        self.pos += rest.len() - trimmed.len();
    }

    /// Returns the next non-separator character along with its offset.
    fn next_letter(&mut self) -> Option<(usize, char)> {
        self.skip_separators();
        let offset = self.pos;
        let c = self.src[offset..].chars().next()?;
        self.pos += c.len_utf8();
        Some((offset, c))
    }

    /// Reads a number: optional sign, digits with an optional fraction and
    /// an optional exponent. A sign or a second decimal point ends the
    /// previous number, so `1-2` and `.5.5` each hold two numbers.
    fn number(&mut self) -> Result<f32, NumberError> {
        self.skip_separators();
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut end = start;
        match bytes.get(end) {
            None => return Err(NumberError::Missing),
            Some(b) if b.is_ascii_alphabetic() => return Err(NumberError::Missing),
            Some(b'+' | b'-') => end += 1,
            _ => (),
        }
        let int_digits = count_digits(&bytes[end..]);
        end += int_digits;
        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            frac_digits = count_digits(&bytes[end + 1..]);
            end += 1 + frac_digits;
        }
        if int_digits + frac_digits == 0 {
            return Err(NumberError::Invalid(start));
        }
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let exp_digits = count_digits(&bytes[exp_end..]);
            if exp_digits > 0 {
                end = exp_end + exp_digits;
            }
        }
        let value = self.src[start..end]
            .parse::<f32>()
            .map_err(|_| NumberError::Invalid(start))?;
        self.pos = end;
        Ok(value)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pt(x: f32, y: f32) -> Point<f32> {
        Point::new(x, y)
    }

    #[test]
    fn parse_every_letter() {
        let src = "M1 2 m3 4 L5 6 l7 8 H9 h10 V11 v12 Q1 2 3 4 q5 6 7 8 \
                   T9 10 t11 12 C1 2 3 4 5 6 c7 8 9 10 11 12 S1 2 3 4 s5 6 7 8 Z z";
        let commands = PathCommand::parse_path(src).unwrap();
        assert_eq!(
            commands,
            vec![
                PathCommand::MoveAbs(pt(1.0, 2.0)),
                PathCommand::MoveRel(pt(3.0, 4.0)),
                PathCommand::LineAbs(pt(5.0, 6.0)),
                PathCommand::LineRel(pt(7.0, 8.0)),
                PathCommand::HLineAbs(9.0),
                PathCommand::HLineRel(10.0),
                PathCommand::VLineAbs(11.0),
                PathCommand::VLineRel(12.0),
                PathCommand::QuadAbs {
                    control: pt(1.0, 2.0),
                    to: pt(3.0, 4.0)
                },
                PathCommand::QuadRel {
                    control: pt(5.0, 6.0),
                    to: pt(7.0, 8.0)
                },
                PathCommand::QuadSmoothAbs(pt(9.0, 10.0)),
                PathCommand::QuadSmoothRel(pt(11.0, 12.0)),
                PathCommand::CubicAbs {
                    control0: pt(1.0, 2.0),
                    control1: pt(3.0, 4.0),
                    to: pt(5.0, 6.0)
                },
                PathCommand::CubicRel {
                    control0: pt(7.0, 8.0),
                    control1: pt(9.0, 10.0),
                    to: pt(11.0, 12.0)
                },
                PathCommand::CubicSmoothAbs {
                    control1: pt(1.0, 2.0),
                    to: pt(3.0, 4.0)
                },
                PathCommand::CubicSmoothRel {
                    control1: pt(5.0, 6.0),
                    to: pt(7.0, 8.0)
                },
                PathCommand::ClosePath,
                PathCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn sign_and_point_delimited_numbers() {
        let commands = PathCommand::parse_path("M-1-2.5l.5.5q1e1,-2E-1 3+4").unwrap();
        assert_eq!(
            commands,
            vec![
                PathCommand::MoveAbs(pt(-1.0, -2.5)),
                PathCommand::LineRel(pt(0.5, 0.5)),
                PathCommand::QuadRel {
                    control: pt(10.0, -0.2),
                    to: pt(3.0, 4.0)
                },
            ]
        );
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(PathCommand::parse_path("").unwrap(), vec![]);
        assert_eq!(PathCommand::parse_path(" \n\t, ").unwrap(), vec![]);
    }

    #[test]
    fn unknown_letter_is_reported() {
        let err = PathCommand::parse_path("M0 0 L1 1 X2 2").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCommand {
                command: 'X',
                offset: 10
            }
        );
        assert_eq!(err.span(), 10..11);
    }

    #[test]
    fn bare_number_in_command_position() {
        // implicit repetition is not accepted
        let err = PathCommand::parse_path("L1 1 2 2").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCommand {
                command: '2',
                offset: 5
            }
        );
    }

    #[test]
    fn missing_arguments() {
        let err = PathCommand::parse_path("M0 0 C1 2 3 Z").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                command: 'C',
                offset: 5,
                expected: 6,
                found: 3
            }
        );
        let err = PathCommand::parse_path("h").unwrap_err();
        assert!(matches!(err, ParseError::MissingArgument { found: 0, .. }));
    }

    #[test]
    fn malformed_number() {
        let err = PathCommand::parse_path("M0 -.").unwrap_err();
        assert_eq!(err, ParseError::InvalidNumber { offset: 3 });
    }

    #[test]
    fn non_ascii_command_span() {
        let err = PathCommand::parse_path("M0 0 é").unwrap_err();
        assert_eq!(err.span(), 5..7);
    }

    #[test]
    fn display_reparses() {
        let src = "M10 20 h-5 Q1.5 2 3 4 s5 6 7 8 Z";
        let commands = PathCommand::parse_path(src).unwrap();
        let printed = commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(printed, "M10 20 h-5 Q1.5 2 3 4 s5 6 7 8 Z");
        assert_eq!(PathCommand::parse_path(&printed).unwrap(), commands);
    }
}
