use std::path::Path;

/// How comment lines are recognized in a file type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentStyle {
    /// Lines whose trimmed text starts with the marker, e.g. `//`.
    Line(String),
    /// Lines opening, inside, or closing a `start` ... `end` block.
    Block { start: String, end: String },
}

impl CommentStyle {
    #[must_use]
    pub fn line(marker: &str) -> Self {
        Self::Line(marker.to_string())
    }

    #[must_use]
    pub fn block(start: &str, end: &str) -> Self {
        Self::Block {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// File name suffix including the dot, e.g. `.java`.
    pub extension: String,
    pub styles: Vec<CommentStyle>,
}

impl Language {
    #[must_use]
    pub fn new(extension: &str, styles: Vec<CommentStyle>) -> Self {
        Self {
            extension: extension.to_string(),
            styles,
        }
    }

    fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}

/// Immutable extension to comment-style table. Built once per run and
/// passed by reference to whatever needs it.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    languages: Vec<Language>,
}

impl StyleRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            languages: Vec::new(),
        }
    }

    pub fn register(&mut self, language: Language) {
        self.languages.push(language);
    }

    /// Styles for `path`, selected by the suffix of its file name.
    /// The first registered extension that matches wins.
    #[must_use]
    pub fn styles_for(&self, path: &Path) -> Option<&[CommentStyle]> {
        let file_name = path.file_name()?.to_string_lossy();
        self.languages
            .iter()
            .find(|lang| lang.matches(&file_name))
            .map(|lang| lang.styles.as_slice())
    }

    #[must_use]
    pub fn is_supported(&self, path: &Path) -> bool {
        self.styles_for(path).is_some()
    }

    /// Registered extensions in registration order.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        self.languages
            .iter()
            .map(|lang| lang.extension.as_str())
            .collect()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(Language::new(
            ".java",
            vec![CommentStyle::line("//"), CommentStyle::block("/*", "*/")],
        ));

        registry.register(Language::new(
            ".js",
            vec![CommentStyle::line("//"), CommentStyle::block("/*", "*/")],
        ));

        registry.register(Language::new(
            ".html",
            vec![CommentStyle::block("<!--", "-->")],
        ));

        registry.register(Language::new(
            ".xml",
            vec![CommentStyle::block("<!--", "-->")],
        ));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
