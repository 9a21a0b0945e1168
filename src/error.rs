use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommentGuardError {
    #[error("Oh no!!!! You have {total} lines of comments, exceeding the threshold of {threshold}")]
    ThresholdExceeded { total: usize, threshold: usize },

    /// Counting was invoked on a file the style table does not cover.
    /// Callers filter by extension first, so reaching this is a bug.
    #[error("{0} not ending with any supported file extensions")]
    UnsupportedExtension(PathBuf),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl CommentGuardError {
    /// Whether this error is the expected "too many comments" outcome
    /// rather than a malfunction.
    #[must_use]
    pub const fn is_threshold_exceeded(&self) -> bool {
        matches!(self, Self::ThresholdExceeded { .. })
    }
}

pub type Result<T> = std::result::Result<T, CommentGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
