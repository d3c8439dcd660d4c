//! Pre-rendered glyphs for a fixed pixel height.

use std::collections::HashMap;

use raster_types::Rgb;

use crate::pixels::PixelBuffer;

/// Colors assigned to characters when populating a [`GlyphCache`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Color for ASCII digits.
    pub digit: Rgb,
    /// Color for every other character.
    pub text: Rgb,
}

impl Palette {
    pub fn color_for(&self, ch: char) -> Rgb {
        if ch.is_ascii_digit() {
            self.digit
        } else {
            self.text
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            digit: Rgb::YELLOW,
            text: Rgb::WHITE,
        }
    }
}

/// Rendered bitmaps keyed by character, all of the same height.
///
/// The cache is filled once and then only read.
#[derive(Clone, Debug)]
pub struct GlyphCache {
    height: u32,
    glyphs: HashMap<char, PixelBuffer>,
}

impl GlyphCache {
    pub fn new(height: u32) -> Self {
        Self {
            height,
            glyphs: HashMap::new(),
        }
    }

    /// Creates a cache from already rendered glyphs.
    pub fn from_glyphs(
        height: u32,
        glyphs: impl IntoIterator<Item = (char, PixelBuffer)>,
    ) -> Self {
        let mut cache = Self::new(height);
        cache.extend(glyphs);
        cache
    }

    /// Adds a glyph, replacing any previous bitmap for `ch`.
    ///
    /// Bitmaps whose size does not match the cache height are dropped.
    pub fn insert(&mut self, ch: char, glyph: PixelBuffer) {
        if glyph.size() != self.height as usize {
            log::warn!(
                "ignoring {}px bitmap for {ch:?} in a {}px cache",
                glyph.size(),
                self.height
            );
            return;
        }
        self.glyphs.insert(ch, glyph);
    }

    pub fn get(&self, ch: char) -> Option<&PixelBuffer> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Extend<(char, PixelBuffer)> for GlyphCache {
    fn extend<T: IntoIterator<Item = (char, PixelBuffer)>>(&mut self, iter: T) {
        for (ch, glyph) in iter {
            self.insert(ch, glyph);
        }
    }
}
