use std::path::{Path, PathBuf};

use crate::error::{CommentGuardError, Result};

use super::{Config, FileSystem, RealFileSystem};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration for `dir`, falling back to defaults when `dir`
    /// has no config file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load_from_dir(&self, dir: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".comment-guard.toml";

pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(dir: &Path) -> PathBuf {
        dir.join(LOCAL_CONFIG_NAME)
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load_from_dir(&self, dir: &Path) -> Result<Config> {
        let path = Self::local_config_path(dir);
        if !self.fs.exists(&path) {
            return Ok(Config::default());
        }

        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| CommentGuardError::FileRead {
                path: path.clone(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.scanner.roots.is_empty() {
        return Err(CommentGuardError::Config(
            "scanner.roots must name at least one directory".to_string(),
        ));
    }
    if config.scanner.roots.iter().any(|root| root.trim().is_empty()) {
        return Err(CommentGuardError::Config(
            "scanner.roots must not contain empty entries".to_string(),
        ));
    }
    if config
        .scanner
        .base_dir
        .as_deref()
        .is_some_and(|dir| dir.trim().is_empty())
    {
        return Err(CommentGuardError::Config(
            "scanner.base_dir must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
