mod registry;

pub use registry::{CommentStyle, Language, StyleRegistry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
