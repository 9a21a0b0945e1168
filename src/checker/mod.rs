mod result;
mod threshold;

pub use result::CheckResult;
pub use threshold::{DEFAULT_THRESHOLD, ThresholdChecker};

pub trait Checker {
    /// Check a repository-wide comment total against the configured limit.
    ///
    /// # Errors
    /// Returns `ThresholdExceeded` when `total` is above the limit.
    fn check(&self, total: usize) -> crate::Result<CheckResult>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
