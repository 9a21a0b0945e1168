use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "comment-guard")]
#[command(author, version, about = "Comment line guard - fail when a repo carries too many comments")]
#[command(long_about = "Walks the frontend and backend trees, counts comment lines in \
    .java, .js, .html and .xml files, and fails when the total exceeds a threshold.\n\n\
    Exit codes:\n  \
    0 - Total within threshold\n  \
    1 - Threshold exceeded\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// The "ideal" number of comment lines in the repo. Exceeding it fails the run
    /// [default: 1000, or check.threshold from .comment-guard.toml]
    #[arg(long = "number", visible_alias = "threshold", value_name = "INT")]
    pub number: Option<usize>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
