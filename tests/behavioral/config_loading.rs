// ABOUTME: Behavioral tests for configuration loading
// Verifies defaults, precedence across files, and how config reaches the app

use pretty_assertions::assert_eq;
use sos2a::app::AppState;
use sos2a::cli::util::open_store;
use sos2a::config::AppConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// Default config works without any files present
#[test]
fn test_default_config_has_sensible_values() {
    let config = AppConfig::default();

    assert_eq!(config.version, env!("CARGO_PKG_VERSION"), "Version should match package version");
    assert_eq!(config.ui.tick_rate_ms, 250, "Event loop ticks every 250ms by default");
    assert!(!config.ui.show_help_on_start);
    assert_eq!(config.logging.filter, "sos2a=info");
    assert!(config.data_dir.is_none(), "Data dir defaults to ~/.sos2a/data");
}

#[test]
fn test_local_file_overrides_user_file() {
    let dir = TempDir::new().unwrap();
    let user = dir.path().join("user.toml");
    let local = dir.path().join("local.toml");
    std::fs::write(&user, "data_dir = \"/home/ada/sos2a\"\n[ui]\nshow_help_on_start = true\n").unwrap();
    std::fs::write(&local, "data_dir = \"/work/sos2a\"\n").unwrap();

    let config = AppConfig::load_from_paths(&[user, local]).unwrap();

    assert_eq!(config.data_dir, Some(PathBuf::from("/work/sos2a")));
    assert!(config.ui.show_help_on_start, "Settings absent from the local file are kept");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_unknown_sections_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[experimental]\nfoo = 1\n[logging]\nfilter = \"sos2a=trace\"\n").unwrap();

    let config = AppConfig::load_from_paths(&[path]).unwrap();
    assert_eq!(config.logging.filter, "sos2a=trace");
}

#[test]
fn test_config_reaches_app_state_and_store() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        data_dir: Some(dir.path().join("assessments")),
        ..AppConfig::default()
    };

    let store = open_store(&config).unwrap();
    assert_eq!(store.dir(), dir.path().join("assessments").as_path());

    let mut config = config;
    config.ui.show_help_on_start = true;
    assert!(AppState::with_config(&config).help_visible);
    assert!(!AppState::default().help_visible);
}
