use super::*;
use crate::counter::test_fixtures::{c_block, lines, markup_block, slash_line};

#[test]
fn line_comment_matches_trimmed_prefix() {
    assert!(is_line_comment("// comment", "//"));
    assert!(is_line_comment("    // indented", "//"));
    assert!(is_line_comment("\t//tab\t", "//"));
    assert!(!is_line_comment("let x = 1; // trailing", "//"));
    assert!(!is_line_comment("/ not quite", "//"));
    assert!(!is_line_comment("", "//"));
}

#[test]
fn line_style_counts_prefixed_lines() {
    let source = lines("// hello\ncode\n// world\n");
    assert_eq!(count_style(&source, &slash_line()), 2);
}

#[test]
fn block_spanning_lines_counts_every_line() {
    let source = lines("/* start\nmiddle\nend */\n");
    assert_eq!(count_style(&source, &c_block()), 3);
}

#[test]
fn block_closing_on_its_own_line_stops_counting() {
    let source = lines("/*\n * doc\n */\nint x;\n");
    assert_eq!(count_block_comments(&source, "/*", "*/"), 3);
}

#[test]
fn single_line_block_leaves_comment_open() {
    // The opening line is never checked for a closing marker.
    let source = lines("/* one line */\ncode\n");
    assert_eq!(count_style(&source, &c_block()), 2);
}

#[test]
fn open_block_runs_until_line_starting_with_end() {
    let source = lines("/* a */\nx\ny\n*/\nz\n");
    assert_eq!(count_block_comments(&source, "/*", "*/"), 4);
}

#[test]
fn end_marker_without_open_block_still_counts() {
    let source = lines("code\n*/\ncode\n");
    assert_eq!(count_block_comments(&source, "/*", "*/"), 1);
}

#[test]
fn markup_comment_on_one_line_counts_once() {
    let source = lines("<!-- c -->\n");
    assert_eq!(count_style(&source, &markup_block()), 1);
}

#[test]
fn no_comment_lines_counts_zero() {
    let source = lines("int a;\nint b;\n");
    assert_eq!(count_style(&source, &slash_line()), 0);
    assert_eq!(count_style(&source, &c_block()), 0);
}

#[test]
fn empty_input_counts_zero() {
    let source: Vec<&str> = Vec::new();
    assert_eq!(count_style(&source, &c_block()), 0);
}

#[test]
fn owned_lines_are_accepted() {
    let source = vec!["// a".to_string(), "b".to_string()];
    assert_eq!(count_style(&source, &slash_line()), 1);
}

#[test]
fn count_comments_sums_each_style() {
    let source = "// line\n/* block\n// nested\n*/\ncode\n";
    // `//` style: 2 lines, block style: 3 lines.
    assert_eq!(count_comments(source, &[slash_line(), c_block()]), 5);
}

#[test]
fn count_comments_handles_crlf() {
    assert_eq!(count_comments("// a\r\ncode\r\n// b\r\n", &[slash_line()]), 2);
}

#[test]
fn count_comments_without_styles_is_zero() {
    assert_eq!(count_comments("// a\n", &[]), 0);
}

#[test]
fn trim_line_strips_ascii_whitespace_only() {
    assert_eq!(trim_line(" \t\x0b\x0c// a \r\n"), "// a");
    assert_eq!(trim_line("\u{a0}// a"), "\u{a0}// a");
}

#[test]
fn non_breaking_space_prefix_is_not_a_comment() {
    assert!(!is_line_comment("\u{a0}// looks like a comment", "//"));
    assert!(is_line_comment("\x0b// vertical tab", "//"));

    let source = lines("\u{a0}/* hidden\nx\n");
    assert_eq!(count_block_comments(&source, "/*", "*/"), 0);
}
