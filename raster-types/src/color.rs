use core::{fmt, str::FromStr};

/// A 24-bit RGB color, one byte per channel.
///
/// The layout is `#[repr(C)]` with no padding, so a slice of pixels can be
/// handed directly to anything expecting packed RGB24 data.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels in `[r, g, b]` order.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An error returned when parsing a color from a string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidColor {
    /// The string (without a leading `#`) was not six characters long.
    InvalidLength(usize),
    /// A character at the given position was not a hex digit.
    InvalidDigit { pos: usize },
}

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected 6 hex digits for a color, found {len}")
            }
            Self::InvalidDigit { pos } => write!(f, "invalid hex digit at position {pos}"),
        }
    }
}

impl std::error::Error for InvalidColor {}

/// Parses `#rrggbb` or `rrggbb`.
impl FromStr for Rgb {
    type Err = InvalidColor;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let digits = src.strip_prefix('#').unwrap_or(src);
        if digits.len() != 6 {
            return Err(InvalidColor::InvalidLength(digits.len()));
        }
        let mut channels = [0u8; 3];
        for (i, byte) in digits.bytes().enumerate() {
            let nibble = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => return Err(InvalidColor::InvalidDigit { pos: i }),
            };
            channels[i / 2] = (channels[i / 2] << 4) | nibble;
        }
        Ok(channels.into())
    }
}
