mod text;

pub use text::TextReporter;

use crate::checker::CheckResult;
use crate::counter::FileCount;
use crate::error::Result;

/// Receives progress and the final outcome of a comment count run.
pub trait Reporter {
    /// Called once per counted file, in walk order.
    ///
    /// # Errors
    /// Returns an error if writing the report fails.
    fn file_counted(&mut self, count: &FileCount) -> Result<()>;

    /// Called after the total passed the threshold check.
    ///
    /// # Errors
    /// Returns an error if writing the report fails.
    fn summary(&mut self, result: &CheckResult, extensions: &[&str]) -> Result<()>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
