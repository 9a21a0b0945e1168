mod comment;
mod file;

pub use comment::{count_block_comments, count_comments, count_style, is_line_comment, trim_line};
pub use file::{CommentCounter, FileCount};

#[cfg(test)]
mod test_fixtures;
