//! Shared test fixtures for counter tests.
//!
//! Provides the comment styles used across `comment_tests` and `file_tests`.

use crate::language::CommentStyle;

/// C-family `//` line comments
pub fn slash_line() -> CommentStyle {
    CommentStyle::line("//")
}

/// C-family `/* */` block comments
pub fn c_block() -> CommentStyle {
    CommentStyle::block("/*", "*/")
}

/// Markup `<!-- -->` block comments
pub fn markup_block() -> CommentStyle {
    CommentStyle::block("<!--", "-->")
}

/// Split like the counter does.
pub fn lines(source: &str) -> Vec<&str> {
    source.lines().collect()
}
