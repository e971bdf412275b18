use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for monogram operations
#[derive(Error, Diagnostic, Debug)]
pub enum MonogramError {
    #[error("IO error: {0}")]
    #[diagnostic(code(monogram::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(monogram::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(monogram::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(monogram::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(monogram::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MonogramError>;

/// Why no avatar image could be produced.
///
/// Every expected failure of the rasterization path and of the stored
/// avatar lookup collapses into this type. It is a value, not a fault:
/// callers treat any variant as "no avatar".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error("vector rasterization engine is not compiled in")]
    EngineMissing,

    #[error("font asset not found at {path}")]
    FontMissing { path: PathBuf },

    #[error("font asset could not be parsed")]
    InvalidFont,

    #[error("vector markup rejected: {0}")]
    Markup(String),

    #[error("cannot allocate a {size}x{size} canvas")]
    Pixmap { size: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("no stored avatar")]
    NotFound,

    #[error("avatar store failed: {0}")]
    Store(String),
}

impl From<Unavailable> for MonogramError {
    fn from(reason: Unavailable) -> Self {
        let help = match &reason {
            Unavailable::EngineMissing => {
                Some("Rebuild with the `svg` feature or provide a font for the fallback path".to_string())
            }
            Unavailable::FontMissing { .. } | Unavailable::InvalidFont => {
                Some("Point --font (or `font:` in monogram.yaml) at a TrueType/OpenType file".to_string())
            }
            _ => None,
        };
        MonogramError::Render {
            message: format!("avatar unavailable: {}", reason),
            help,
        }
    }
}
