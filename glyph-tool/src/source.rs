//! Loading glyph outlines from disk: SVG fonts, JSON glyph sets and
//! OpenType fonts.

use std::{collections::BTreeMap, path::Path};

use glyph_raster::{FontMetrics, PathCommand};
use serde::{Deserialize, Serialize};
use skrifa::{
    outline::DrawSettings,
    prelude::{LocationRef, Size},
    raw::FontRef,
    MetadataProvider,
};

use crate::{error::LoadError, pen::CommandPen};

/// The characters a glyph source keeps: printable ASCII, including space.
pub fn is_supported(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_graphic()
}

/// On-disk format of a JSON glyph set.
///
/// ```json
/// {
///   "units_per_em": 1000,
///   "ascent": 800,
///   "descent": -200,
///   "glyphs": { "l": "M100 0 h80 v700 h-80 z" }
/// }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GlyphSetFile {
    pub units_per_em: u16,
    pub ascent: i32,
    pub descent: i32,
    #[serde(default)]
    pub glyphs: BTreeMap<String, String>,
}

/// Outlines for a set of characters sharing one set of metrics.
#[derive(Clone, Debug)]
pub struct GlyphSource {
    metrics: FontMetrics,
    glyphs: BTreeMap<char, Vec<PathCommand>>,
}

impl GlyphSource {
    /// Loads glyphs from `path`, choosing the format by extension.
    ///
    /// `.svg` files are read as SVG fonts and `.json` files as glyph sets;
    /// anything else is treated as an OpenType font.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("svg") => Self::from_svg_font(&read_text(path)?),
            Some("json") => Self::from_json(&read_text(path)?),
            _ => {
                let file = std::fs::File::open(path).map_err(|e| LoadError::io(path, e))?;
                // the mapping is only read while the file stays open
                let data =
                    unsafe { memmap2::Mmap::map(&file) }.map_err(|e| LoadError::io(path, e))?;
                Self::from_font_data(&data)
            }
        }
    }

    /// Parses an SVG font document.
    ///
    /// Metrics come from the `units-per-em`, `ascent` and `descent`
    /// attributes of `<svg><defs><font><font-face>`; outlines from the `d`
    /// attribute of each `<glyph>` whose `unicode` is a single supported
    /// character. Glyphs without `d` are empty. A later glyph for the same
    /// character replaces an earlier one.
    pub fn from_svg_font(text: &str) -> Result<Self, LoadError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)?;
        let root = doc.root_element();
        if !root.has_tag_name("svg") {
            return Err(LoadError::SvgFont("root element is not <svg>".into()));
        }
        let font = child_element(root, "defs")
            .and_then(|defs| child_element(defs, "font"))
            .ok_or_else(|| LoadError::SvgFont("missing <defs><font>".into()))?;
        let face = child_element(font, "font-face")
            .ok_or_else(|| LoadError::SvgFont("missing <font-face>".into()))?;
        let metrics = FontMetrics::new(
            int_attribute(face, "units-per-em")?,
            int_attribute(face, "ascent")?,
            int_attribute(face, "descent")?,
        );

        let mut glyphs = BTreeMap::new();
        for glyph in font.children().filter(|node| node.has_tag_name("glyph")) {
            let Some(unicode) = glyph.attribute("unicode") else {
                continue;
            };
            let mut chars = unicode.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) if is_supported(ch) => ch,
                _ => {
                    log::debug!("skipping glyph for {unicode:?}");
                    continue;
                }
            };
            let data = glyph.attribute("d").unwrap_or_default();
            let commands = PathCommand::parse_path(data).map_err(|source| LoadError::PathData {
                ch,
                data: data.to_owned(),
                source,
            })?;
            glyphs.insert(ch, commands);
        }
        log::debug!(
            "loaded {} glyphs from SVG font, {} units per em",
            glyphs.len(),
            metrics.units_per_em
        );
        Ok(Self { metrics, glyphs })
    }

    /// Parses a JSON glyph set. Any malformed path data is an error.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let file: GlyphSetFile = serde_json::from_str(text)?;
        let metrics = FontMetrics::new(file.units_per_em, file.ascent, file.descent);
        let mut glyphs = BTreeMap::new();
        for (key, data) in file.glyphs {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(LoadError::InvalidKey(key)),
            };
            if !is_supported(ch) {
                log::debug!("skipping unsupported character {ch:?}");
                continue;
            }
            let commands = PathCommand::parse_path(&data)
                .map_err(|source| LoadError::PathData { ch, data, source })?;
            glyphs.insert(ch, commands);
        }
        log::debug!("loaded {} glyphs from JSON", glyphs.len());
        Ok(Self { metrics, glyphs })
    }

    /// Reads outlines for the supported characters from an OpenType font.
    ///
    /// Outlines are drawn unhinted at the font's design resolution and the
    /// vertical metrics are rounded to whole design units.
    pub fn from_font_data(data: &[u8]) -> Result<Self, LoadError> {
        let font = FontRef::new(data).map_err(|e| LoadError::Font(e.to_string()))?;
        let font_metrics = font.metrics(Size::unscaled(), LocationRef::default());
        let metrics = FontMetrics::new(
            font_metrics.units_per_em,
            font_metrics.ascent.round() as i32,
            font_metrics.descent.round() as i32,
        );
        let charmap = font.charmap();
        let outlines = font.outline_glyphs();
        let mut glyphs = BTreeMap::new();
        for ch in ' '..='~' {
            let Some(outline) = charmap.map(ch).and_then(|gid| outlines.get(gid)) else {
                continue;
            };
            let mut pen = CommandPen::new();
            let settings = DrawSettings::unhinted(Size::unscaled(), LocationRef::default());
            if let Err(e) = outline.draw(settings, &mut pen) {
                log::warn!("failed to draw glyph for {ch:?}: {e}");
                continue;
            }
            glyphs.insert(ch, pen.into_commands());
        }
        log::debug!(
            "loaded {} glyphs from font, {} units per em",
            glyphs.len(),
            metrics.units_per_em
        );
        Ok(Self { metrics, glyphs })
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn glyph(&self, ch: char) -> Option<&[PathCommand]> {
        self.glyphs.get(&ch).map(Vec::as_slice)
    }

    /// Iterates over the loaded characters in code point order.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, &[PathCommand])> + '_ {
        self.glyphs.iter().map(|(ch, commands)| (*ch, commands.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))
}

fn child_element<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children().find(|child| child.has_tag_name(name))
}

/// Reads a numeric attribute, dropping any fractional part.
fn int_attribute<T: TryFrom<i64>>(node: roxmltree::Node, name: &str) -> Result<T, LoadError> {
    let invalid = || LoadError::SvgFont(format!("bad or missing '{name}' on <font-face>"));
    let value: f64 = node
        .attribute(name)
        .and_then(|value| value.trim().parse().ok())
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(invalid)?;
    T::try_from(value.trunc() as i64).map_err(|_| invalid())
}
