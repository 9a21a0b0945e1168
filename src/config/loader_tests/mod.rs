mod mock_fs;

use std::path::Path;

use super::*;
use mock_fs::MockFileSystem;

fn load(fs: MockFileSystem) -> Result<Config> {
    FileConfigLoader::with_fs(fs).load_from_dir(Path::new("/project"))
}

#[test]
fn missing_config_yields_defaults() {
    let config = load(MockFileSystem::new()).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_config_from_dir() {
    let fs = MockFileSystem::new().with_file(
        "/project/.comment-guard.toml",
        "[check]\nthreshold = 7\n",
    );
    let config = load(fs).unwrap();

    assert_eq!(config.check.threshold, 7);
    assert_eq!(config.scanner.roots, vec!["frontend", "backend"]);
    assert_eq!(config.scanner.base_dir, None);
}

#[test]
fn config_in_other_dir_is_ignored() {
    let fs = MockFileSystem::new().with_file("/elsewhere/.comment-guard.toml", "[check]\nthreshold = 7\n");
    let config = load(fs).unwrap();

    assert_eq!(config.check.threshold, 1000);
}

#[test]
fn scanner_section_is_read() {
    let fs = MockFileSystem::new().with_file(
        "/repo/.comment-guard.toml",
        "[scanner]\nroots = [\"web\", \"server\"]\nexclude = [\"**/dist/**\"]\nbase_dir = \".\"\n",
    );
    let config = FileConfigLoader::with_fs(fs)
        .load_from_dir(Path::new("/repo"))
        .unwrap();

    assert_eq!(config.scanner.roots, vec!["web", "server"]);
    assert_eq!(config.scanner.exclude, vec!["**/dist/**"]);
    assert_eq!(config.scanner.base_dir.as_deref(), Some("."));
}

#[test]
fn malformed_config_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.comment-guard.toml", "[check\n");
    let err = load(fs).unwrap_err();

    assert!(matches!(err, CommentGuardError::TomlParse(_)));
}

#[test]
fn empty_roots_are_rejected() {
    let fs =
        MockFileSystem::new().with_file("/project/.comment-guard.toml", "[scanner]\nroots = []\n");
    let err = load(fs).unwrap_err();

    assert!(matches!(err, CommentGuardError::Config(msg) if msg.contains("at least one")));
}

#[test]
fn blank_root_entry_is_rejected() {
    let fs = MockFileSystem::new().with_file(
        "/project/.comment-guard.toml",
        "[scanner]\nroots = [\"frontend\", \" \"]\n",
    );
    let err = load(fs).unwrap_err();

    assert!(matches!(err, CommentGuardError::Config(_)));
}

#[test]
fn blank_base_dir_is_rejected() {
    let fs = MockFileSystem::new()
        .with_file("/project/.comment-guard.toml", "[scanner]\nbase_dir = \"\"\n");
    let err = load(fs).unwrap_err();

    assert!(matches!(err, CommentGuardError::Config(msg) if msg.contains("base_dir")));
}
