use std::path::PathBuf;

use glyph_raster::{FontMetrics, Palette, Rgb};
use glyph_tool::{build_cache, render_text, ErrorReport, GlyphSource, Layout, LoadError};

fn test_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(name)
}

#[test]
fn load_json_glyph_set() {
    let _ = env_logger::builder().is_test(true).try_init();
    let source = GlyphSource::load(&test_data("blocks.json")).unwrap();
    assert_eq!(*source.metrics(), FontMetrics::new(1000, 800, -200));
    assert_eq!(source.len(), 8);
    assert!(source.glyph('o').is_some());
    assert!(source.glyph('A').is_none());
}

#[test]
fn cache_from_json_glyph_set() {
    let _ = env_logger::builder().is_test(true).try_init();
    let source = GlyphSource::load(&test_data("blocks.json")).unwrap();
    let cache = build_cache(&source, 48, &Palette::default());
    assert_eq!(cache.len(), source.len());
    assert_eq!(cache.height(), 48);

    for (ch, _) in source.glyphs() {
        assert_eq!(cache.get(ch).unwrap().pixels().len(), 48 * 48, "{ch:?}");
    }
    assert!(cache.get(' ').unwrap().is_blank());

    // the stem of the "l" is fully covered
    assert_eq!(cache.get('l').unwrap().get(24, 20), Some(Rgb::WHITE));

    // digits are yellow, so they never carry any blue
    for digit in ['0', '1'] {
        let glyph = cache.get(digit).unwrap();
        assert!(!glyph.is_blank());
        assert!(glyph.pixels().iter().all(|px| px.b == 0));
    }
}

#[test]
fn load_svg_font() {
    let _ = env_logger::builder().is_test(true).try_init();
    let source = GlyphSource::load(&test_data("blocks.svg")).unwrap();
    assert_eq!(*source.metrics(), FontMetrics::new(1000, 800, -200));
    // the two letter ligature is not a single character
    assert_eq!(source.len(), 8);
    assert!(source.glyph(' ').unwrap().is_empty());
}

#[test]
fn svg_font_renders_like_json_glyph_set() {
    let svg = GlyphSource::load(&test_data("blocks.svg")).unwrap();
    let json = GlyphSource::load(&test_data("blocks.json")).unwrap();
    let svg_cache = build_cache(&svg, 32, &Palette::default());
    let json_cache = build_cache(&json, 32, &Palette::default());
    assert_eq!(svg_cache.len(), json_cache.len());
    for (ch, _) in json.glyphs() {
        assert_eq!(svg_cache.get(ch), json_cache.get(ch), "{ch:?}");
    }
}

#[test]
fn malformed_svg_glyph_is_reported_with_location() {
    let err = GlyphSource::load(&test_data("broken.svg")).unwrap_err();
    assert!(matches!(err, LoadError::PathData { ch: 'x', .. }));
    let report = ErrorReport::from(err);
    let location = report.location().unwrap();
    assert_eq!(location.offset(), 16);
    assert_eq!(location.len(), 1);
}

#[test]
fn render_sheet() {
    let source = GlyphSource::load(&test_data("blocks.json")).unwrap();
    let cache = build_cache(&source, 24, &Palette::default());
    let layout = Layout {
        width: 200,
        height: 100,
        ..Default::default()
    };
    let image = render_text(&cache, &["lo", "10"], &layout);
    assert_eq!(image.dimensions(), (200, 100));
    assert!(image.pixels().any(|px| px.0 == [255, 255, 255]));
    assert!(image.pixels().any(|px| px.0 == [255, 255, 0]));
}

#[test]
fn malformed_path_is_reported_with_location() {
    let err = GlyphSource::load(&test_data("broken.json")).unwrap_err();
    assert!(matches!(err, LoadError::PathData { ch: 'x', .. }));
    let report = ErrorReport::from(err);
    let location = report.location().unwrap();
    assert_eq!(location.offset(), 16);
    assert_eq!(location.len(), 1);
}

#[test]
fn missing_file() {
    let err = GlyphSource::load(&test_data("missing.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    let err = GlyphSource::load(&test_data("missing.ttf")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    let err = GlyphSource::load(&test_data("missing.svg")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
