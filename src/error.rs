use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the metrics extractor
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Malformed JSON on input, or a serialization failure on output
    Json(serde_json::Error),
    /// A font file required by the dataset could not be read
    MissingFontFile { path: PathBuf, source: io::Error },
    /// Font parsing or processing errors
    Font(String),
    /// Dataset key that cannot name a font file
    InvalidFontName(String),
    /// Codepoint absent from every Unicode cmap subtable
    UnresolvedCodepoint { font: String, codepoint: u32 },
    /// Unicode cmap subtables disagree on the glyph for a codepoint
    AmbiguousCodepoint {
        font: String,
        codepoint: u32,
        glyphs: Vec<String>,
    },
    /// A curated base codepoint has no metrics in the dataset
    MissingBaseMetrics {
        font: String,
        codepoint: u32,
        base: u32,
    },
}

impl Error {
    /// Whether the run may warn and carry on with the next codepoint
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnresolvedCodepoint { .. } | Error::AmbiguousCodepoint { .. }
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::MissingFontFile { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::MissingFontFile { path, source } => {
                write!(f, "Cannot read font file {}: {}", path.display(), source)
            }
            Error::Font(msg) => write!(f, "Font error: {}", msg),
            Error::InvalidFontName(name) => write!(f, "Invalid font name: {:?}", name),
            Error::UnresolvedCodepoint { font, codepoint } => {
                write!(f, "Codepoint {} of font {} maps to no name", codepoint, font)
            }
            Error::AmbiguousCodepoint {
                font,
                codepoint,
                glyphs,
            } => write!(
                f,
                "Codepoint {} of font {} maps to multiple names: {}",
                codepoint,
                font,
                glyphs.join(", ")
            ),
            Error::MissingBaseMetrics {
                font,
                codepoint,
                base,
            } => write!(
                f,
                "Codepoint {} of font {} is based on codepoint {}, which has no metrics",
                codepoint, font, base
            ),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Result type alias for metrics extraction
pub type Result<T> = std::result::Result<T, Error>;
