use std::io::Write;

use crate::checker::CheckResult;
use crate::counter::FileCount;
use crate::error::Result;

use super::Reporter;

/// Plain-text reporter. Files without comments produce no line.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn file_counted(&mut self, count: &FileCount) -> Result<()> {
        if count.has_comments() {
            writeln!(
                self.out,
                "Found {} lines of comments in {}",
                count.comments,
                count.path.display()
            )?;
        }
        Ok(())
    }

    fn summary(&mut self, result: &CheckResult, extensions: &[&str]) -> Result<()> {
        writeln!(
            self.out,
            "You have total of {} lines of comments in all {extensions:?} files in the repo",
            result.total
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
