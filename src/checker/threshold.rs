use crate::error::{CommentGuardError, Result};

use super::{CheckResult, Checker};

/// Default comment line budget when neither config nor CLI set one.
pub const DEFAULT_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdChecker {
    threshold: usize,
}

impl ThresholdChecker {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for ThresholdChecker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Checker for ThresholdChecker {
    fn check(&self, total: usize) -> Result<CheckResult> {
        if total > self.threshold {
            return Err(CommentGuardError::ThresholdExceeded {
                total,
                threshold: self.threshold,
            });
        }

        Ok(CheckResult {
            total,
            threshold: self.threshold,
        })
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
