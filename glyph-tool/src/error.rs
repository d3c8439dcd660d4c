use std::path::{Path, PathBuf};

use glyph_raster::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};

/// Failure to produce a glyph set from a file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid glyph set: {0}")]
    Json(#[from] serde_json::Error),
    #[error("glyph key {0:?} is not a single character")]
    InvalidKey(String),
    #[error("invalid SVG font: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("invalid SVG font: {0}")]
    SvgFont(String),
    #[error("bad path data for glyph {ch:?}")]
    PathData {
        ch: char,
        data: String,
        source: ParseError,
    },
    #[error("failed to read font: {0}")]
    Font(String),
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_owned(),
            source,
        }
    }
}

/// A printable error for the command line.
///
/// Path data errors carry the offending glyph's path text so the location
/// can be shown in context.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ErrorReport {
    #[error("{0}")]
    Message(String),
    #[error("parsing path data failed")]
    PathData {
        #[source_code]
        src: NamedSource,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },
}

impl ErrorReport {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Labels the offending characters of a glyph's path data.
    pub fn from_parse_error(error: &ParseError, name: impl AsRef<str>, data: String) -> Self {
        let span = error.span();
        // spans at the very end of the input point just past it
        let start = span.start.min(data.len());
        let len = span.end.min(data.len()) - start;
        Self::PathData {
            src: NamedSource::new(name, data),
            span: (start, len).into(),
            reason: error.to_string(),
        }
    }

    /// The labeled region of the source, if there is one.
    pub fn location(&self) -> Option<SourceSpan> {
        match self {
            Self::Message(_) => None,
            Self::PathData { span, .. } => Some(*span),
        }
    }
}

impl From<LoadError> for ErrorReport {
    fn from(error: LoadError) -> Self {
        match error {
            LoadError::PathData { ch, data, source } => {
                Self::from_parse_error(&source, format!("glyph {ch:?}"), data)
            }
            other => Self::message(other.to_string()),
        }
    }
}
