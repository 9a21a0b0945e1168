#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the comment-guard binary.
#[macro_export]
macro_rules! comment_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("comment-guard"))
    };
}

/// Config that points the roots at the fixture itself instead of the
/// directory next to the crate.
pub const LOCAL_BASE_CONFIG: &str = "[scanner]\nbase_dir = \".\"\n";

/// A temporary repository laid out with `frontend/` and `backend/` roots.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a fixture with empty `frontend/` and `backend/` directories.
    pub fn new() -> Self {
        let fixture = Self::bare();
        fixture.create_dir("frontend");
        fixture.create_dir("backend");
        fixture
    }

    /// Creates a fixture with only the base config and no directories.
    pub fn bare() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_config(LOCAL_BASE_CONFIG);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.comment-guard.toml` at the repository root, replacing
    /// the base config. Include `base_dir = "."` to keep the roots local.
    pub fn create_config(&self, content: &str) {
        self.create_file(".comment-guard.toml", content);
    }

    /// Creates a JavaScript file with `comment_lines` `//` comments
    /// followed by `code_lines` statements.
    pub fn create_js_file(&self, relative_path: &str, comment_lines: usize, code_lines: usize) {
        let mut content = String::new();

        for i in 0..comment_lines {
            let _ = writeln!(content, "// Comment line {i}");
        }

        for i in 0..code_lines {
            let _ = writeln!(content, "const var{i} = {i};");
        }

        self.create_file(relative_path, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
