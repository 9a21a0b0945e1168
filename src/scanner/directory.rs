use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileFilter, FileScanner};
use crate::error::{CommentGuardError, Result};

/// Recursive walk over a root directory. Order follows the filesystem
/// and is not guaranteed to be stable between runs.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|source| CommentGuardError::Walk {
                root: root.to_path_buf(),
                source,
            })?;

            // Symlinked files count like regular ones; symlinked dirs are not entered.
            if entry.path().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
