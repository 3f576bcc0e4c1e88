// ============================================================================
// Line Source Interface
// Boundary to the text loaders that feed the decimal reader
// ============================================================================

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while loading lines from a text resource.
#[derive(Debug)]
pub enum SourceError {
    /// The resource does not exist
    NotFound { path: PathBuf },
    /// The resource exists but could not be opened or read
    Io(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound { path } => {
                write!(f, "line source not found: {}", path.display())
            },
            SourceError::Io(err) => write!(f, "failed to read line source: {}", err),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::NotFound { .. } => None,
            SourceError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Io(err)
    }
}

/// A producer of text lines.
///
/// Implementations return every line in order, fully materialized, with
/// `\n` / `\r\n` terminators stripped. A missing resource is reported as
/// [`SourceError::NotFound`]; an existing empty resource yields `Ok(vec![])`.
pub trait LineSource: Send + Sync {
    /// Load all lines
    fn lines(&self) -> Result<Vec<String>, SourceError>;

    /// Human-readable description for logging
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}
