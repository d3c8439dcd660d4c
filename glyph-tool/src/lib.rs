//! Glyph sources and text sheets for the `glyph-tool` binary.

mod error;
pub mod layout;
mod pen;
pub mod source;

pub use error::{ErrorReport, LoadError};
pub use layout::{build_cache, render_text, Layout, DEMO_TEXT};
pub use pen::CommandPen;
pub use source::GlyphSource;
