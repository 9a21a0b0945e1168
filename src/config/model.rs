use serde::{Deserialize, Serialize};

use crate::checker::DEFAULT_THRESHOLD;

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Directories to walk, relative to the base directory.
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,

    /// Glob patterns for files to skip entirely, matched against paths
    /// relative to the base directory.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Directory the roots are resolved against, relative to the directory
    /// holding the config file. Unset means the parent of the tool's own
    /// crate directory.
    #[serde(default)]
    pub base_dir: Option<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            exclude: Vec::new(),
            base_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Maximum acceptable number of comment lines across all roots.
    #[serde(default = "default_threshold")]
    pub threshold: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

fn default_roots() -> Vec<String> {
    vec!["frontend".to_string(), "backend".to_string()]
}

const fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
