use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Directories a check run reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckContext {
    /// Searched for `.comment-guard.toml`.
    pub config_dir: PathBuf,
    /// Base for the roots when the config does not set `scanner.base_dir`.
    pub default_base_dir: PathBuf,
}

impl CheckContext {
    /// Config from the working directory, roots next to the tool's crate.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            config_dir: std::env::current_dir()?,
            default_base_dir: default_base_dir(),
        })
    }

    /// Directory the configured roots are joined onto. A configured
    /// `scanner.base_dir` is relative to the config directory.
    #[must_use]
    pub fn base_dir(&self, config: &Config) -> PathBuf {
        config
            .scanner
            .base_dir
            .as_ref()
            .map_or_else(|| self.default_base_dir.clone(), |dir| self.config_dir.join(dir))
    }
}

/// One level up from the crate directory, where the `frontend` and
/// `backend` trees sit next to it.
#[must_use]
pub fn default_base_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
