//! Error types for skill document operations.
//!
//! Library code uses `thiserror` for explicit error enums.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, parsing or indexing skill documents.
#[derive(Error, Debug)]
pub enum SkillError {
    /// The YAML frontmatter block is syntactically invalid.
    ///
    /// This is the only failure a submitter sees; the YAML message is kept for diagnostics.
    #[error("your skill document's frontmatter could not be parsed: {message}")]
    Frontmatter {
        /// Message from the YAML parser.
        message: String,
    },
    /// Reading or writing a file failed.
    #[error("IO error at {path}: {source}")]
    Io {
        /// File that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A catalog index file could not be encoded or decoded.
    #[error("index error at {path}: {source}")]
    Index {
        /// Index file path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl SkillError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error came from malformed frontmatter.
    #[must_use]
    pub fn is_frontmatter(&self) -> bool {
        matches!(self, Self::Frontmatter { .. })
    }
}

impl From<serde_yaml::Error> for SkillError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Frontmatter {
            message: error.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = SkillError> = std::result::Result<T, E>;
