use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CommentGuardError, Result};
use crate::language::StyleRegistry;

use super::count_comments;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub path: PathBuf,
    pub comments: usize,
}

impl FileCount {
    #[must_use]
    pub const fn has_comments(&self) -> bool {
        self.comments > 0
    }
}

pub struct CommentCounter<'a> {
    registry: &'a StyleRegistry,
}

impl<'a> CommentCounter<'a> {
    #[must_use]
    pub const fn new(registry: &'a StyleRegistry) -> Self {
        Self { registry }
    }

    /// Read `path` and count its comment lines.
    ///
    /// Contents are decoded lossily, so non-UTF-8 bytes never fail a run.
    ///
    /// # Errors
    /// Returns `UnsupportedExtension` if the file name matches no registered
    /// extension (callers must filter first), or `FileRead` if reading fails.
    pub fn count_file(&self, path: &Path) -> Result<FileCount> {
        let styles = self
            .registry
            .styles_for(path)
            .ok_or_else(|| CommentGuardError::UnsupportedExtension(path.to_path_buf()))?;

        let bytes = fs::read(path).map_err(|source| CommentGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);

        Ok(FileCount {
            path: path.to_path_buf(),
            comments: count_comments(&source, styles),
        })
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
