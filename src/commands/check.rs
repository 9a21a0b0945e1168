use std::io::Write;
use std::path::Path;

use crate::checker::{CheckResult, Checker, ThresholdChecker};
use crate::cli::Cli;
use crate::config::{ConfigLoader, FileConfigLoader};
use crate::counter::CommentCounter;
use crate::language::StyleRegistry;
use crate::output::{Reporter, TextReporter};
use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED};

use super::CheckContext;

/// Run the comment check, writing the report to `out`.
/// Errors are printed to stderr and mapped to an exit code.
pub fn run_check<W: Write>(cli: &Cli, ctx: &CheckContext, out: W) -> i32 {
    let mut reporter = TextReporter::new(out);
    match run_check_impl(cli, ctx, &mut reporter) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_threshold_exceeded() {
                EXIT_THRESHOLD_EXCEEDED
            } else {
                EXIT_CONFIG_ERROR
            }
        }
    }
}

/// Load config, walk every root, total the comment lines and check the
/// total against the threshold.
///
/// # Errors
/// Returns `ThresholdExceeded` when the total is over the threshold, or any
/// configuration, walk, or read error encountered on the way.
pub fn run_check_impl<R: Reporter>(
    cli: &Cli,
    ctx: &CheckContext,
    reporter: &mut R,
) -> crate::Result<CheckResult> {
    // 1. Load configuration, CLI threshold wins
    let config = FileConfigLoader::new().load_from_dir(&ctx.config_dir)?;
    let threshold = cli.number.unwrap_or(config.check.threshold);

    // 2. Build the style table once for the whole run
    let registry = StyleRegistry::default();

    // 3. Walk and count
    let base_dir = ctx.base_dir(&config);
    let total = collect_comments(
        &base_dir,
        &config.scanner.roots,
        &registry,
        &config.scanner.exclude,
        reporter,
    )?;

    // 4. Check and report
    let result = ThresholdChecker::new(threshold).check(total)?;
    reporter.summary(&result, &registry.extensions())?;

    Ok(result)
}

/// Count comment lines in every supported file under each of `roots`
/// (joined onto `base_dir`) and return the sum. Each counted file is passed
/// to `reporter` as soon as it is done.
///
/// # Errors
/// Returns the first walk, read, or pattern error; nothing is skipped.
pub fn collect_comments<R: Reporter + ?Sized>(
    base_dir: &Path,
    roots: &[String],
    registry: &StyleRegistry,
    exclude: &[String],
    reporter: &mut R,
) -> crate::Result<usize> {
    let suffixes = registry
        .extensions()
        .into_iter()
        .map(String::from)
        .collect();
    let filter = SuffixFilter::new(suffixes, exclude)?.with_base(base_dir);
    let scanner = DirectoryScanner::new(filter);
    let counter = CommentCounter::new(registry);

    let mut total = 0;
    for root in roots {
        for path in scanner.scan(&base_dir.join(root))? {
            let count = counter.count_file(&path)?;
            reporter.file_counted(&count)?;
            total += count.comments;
        }
    }

    Ok(total)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
