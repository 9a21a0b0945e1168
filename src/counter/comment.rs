use crate::language::CommentStyle;

/// Strip the ASCII whitespace set (space, `\t`, `\n`, `\r`, `\x0b`, `\x0c`)
/// from both ends. Unicode spaces such as U+00A0 are kept.
#[must_use]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}

/// Whether `line`, trimmed on both ends, starts with `marker`.
#[must_use]
pub fn is_line_comment(line: &str, marker: &str) -> bool {
    trim_line(line).starts_with(marker)
}

/// Count lines that open, sit inside, or close a block comment.
///
/// Only line *prefixes* are inspected. A line starting with `start` always
/// opens a block, even when it also contains `end`, so `/* one line */`
/// leaves the block open until a line starting with `end` shows up.
#[must_use]
pub fn count_block_comments<S: AsRef<str>>(lines: &[S], start: &str, end: &str) -> usize {
    let mut count = 0;
    let mut in_comment = false;

    for line in lines {
        let trimmed = trim_line(AsRef::<str>::as_ref(line));
        if trimmed.starts_with(start) {
            count += 1;
            in_comment = true;
        } else if trimmed.starts_with(end) {
            count += 1;
            in_comment = false;
        } else if in_comment {
            count += 1;
        }
    }

    count
}

/// Count comment lines of a single style over the whole line sequence.
#[must_use]
pub fn count_style<S: AsRef<str>>(lines: &[S], style: &CommentStyle) -> usize {
    match style {
        CommentStyle::Line(marker) => lines
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|line| is_line_comment(line, marker))
            .count(),
        CommentStyle::Block { start, end } => count_block_comments(lines, start, end),
    }
}

/// Sum of the per-style counts for `source`. Each style sees every line,
/// so a line matched by two styles counts twice.
#[must_use]
pub fn count_comments(source: &str, styles: &[CommentStyle]) -> usize {
    let lines: Vec<&str> = source.lines().collect();
    styles.iter().map(|style| count_style(&lines, style)).sum()
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
