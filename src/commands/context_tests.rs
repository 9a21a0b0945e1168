use super::*;

#[test]
fn default_base_dir_is_crate_parent() {
    let base = default_base_dir();

    assert!(base.starts_with(env!("CARGO_MANIFEST_DIR")));
    assert!(base.ends_with(".."));
}

#[test]
fn from_env_uses_crate_parent_for_roots() {
    let ctx = CheckContext::from_env().unwrap();

    assert_eq!(ctx.default_base_dir, default_base_dir());
    assert_eq!(ctx.config_dir, std::env::current_dir().unwrap());
}

#[test]
fn base_dir_defaults_when_config_is_silent() {
    let ctx = CheckContext {
        config_dir: PathBuf::from("/work"),
        default_base_dir: PathBuf::from("/repo"),
    };

    assert_eq!(ctx.base_dir(&Config::default()), PathBuf::from("/repo"));
}

#[test]
fn configured_base_dir_is_relative_to_config_dir() {
    let ctx = CheckContext {
        config_dir: PathBuf::from("/work"),
        default_base_dir: PathBuf::from("/repo"),
    };
    let mut config = Config::default();
    config.scanner.base_dir = Some("checkout".to_string());

    assert_eq!(ctx.base_dir(&config), PathBuf::from("/work/checkout"));
}
