//! Font-wide vertical metrics.

use crate::SUPERSAMPLE;

/// Vertical metrics shared by every glyph of a font, in design units.
///
/// `descent` is negative when the font extends below the baseline.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascent: i32,
    pub descent: i32,
}

impl FontMetrics {
    pub const fn new(units_per_em: u16, ascent: i32, descent: i32) -> Self {
        Self {
            units_per_em,
            ascent,
            descent,
        }
    }

    /// Design units to supersampled device pixels for a glyph rendered
    /// `target_height` pixels tall.
    ///
    /// Returns 0 when `units_per_em` is 0.
    pub fn scale_for_height(&self, target_height: u32) -> f32 {
        if self.units_per_em == 0 {
            return 0.0;
        }
        (SUPERSAMPLE as f32 * target_height as f32) / self.units_per_em as f32
    }

    /// Side length of the square supersampled mask at `scale`.
    pub fn supersampled_size(&self, scale: f32) -> usize {
        let size = (self.units_per_em as f32 * scale).round();
        if size.is_finite() && size > 0.0 {
            size as usize
        } else {
            0
        }
    }
}
