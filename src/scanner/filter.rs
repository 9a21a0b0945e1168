use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CommentGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose name ends with one of `suffixes` and which match
/// none of the exclude globs.
///
/// Globs are matched against the path relative to `base` when one is set,
/// so results do not depend on where the tree is checked out.
pub struct SuffixFilter {
    suffixes: Vec<String>,
    exclude_patterns: GlobSet,
    base: Option<PathBuf>,
}

impl SuffixFilter {
    /// Create a new filter with the given name suffixes and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(suffixes: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| CommentGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| CommentGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffixes,
            exclude_patterns,
            base: None,
        })
    }

    #[must_use]
    pub fn with_base(mut self, base: &Path) -> Self {
        self.base = Some(base.to_path_buf());
        self
    }

    fn has_valid_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| self.suffixes.iter().any(|s| name.ends_with(s.as_str())))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let relative = self
            .base
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path);
        self.exclude_patterns.is_match(relative)
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_suffix(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
