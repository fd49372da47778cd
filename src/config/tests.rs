//! Configuration tests
//!
//! Guards that the generated template stays parseable and that every
//! persisted field survives a round trip through the file layer.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.hint_delay_ms = 250;
    config.show_logs = false;
    config.mouse = false;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "trace".to_string();

    let file = Config::parse_file_config(&config.to_toml()).expect("template parses");
    let loaded = Config::from_file_and_env(file, no_env);

    assert_eq!(loaded.theme, "nord");
    assert_eq!(loaded.hint_delay_ms, 250);
    assert!(!loaded.show_logs);
    assert!(!loaded.mouse);
    assert_eq!(loaded.logging.level, "debug");
    assert!(loaded.logging.file_enabled);
    assert_eq!(loaded.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(loaded.logging.file_prefix, "trace");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let file = Config::parse_file_config("").expect("empty file parses");
    let config = Config::from_file_and_env(file, no_env);
    let defaults = Config::default();

    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.hint_delay_ms, defaults.hint_delay_ms);
    assert_eq!(config.hint_delay(), std::time::Duration::from_millis(1500));
    assert!(config.mouse);
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config("theme = \"nord\"\nhint_delay_ms = 10\nmouse = true\n")
        .expect("parses");
    let env: HashMap<&str, &str> = [
        ("ROZBOR_THEME", "dracula"),
        ("ROZBOR_HINT_DELAY_MS", "20"),
        ("ROZBOR_NO_MOUSE", "1"),
        ("ROZBOR_LOG_DIR", "/tmp/rozbor"),
    ]
    .into_iter()
    .collect();

    let config = Config::from_file_and_env(file, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.theme, "dracula");
    assert_eq!(config.hint_delay_ms, 20);
    assert!(!config.mouse);
    assert_eq!(config.logging.file_dir, PathBuf::from("/tmp/rozbor"));
}

#[test]
fn test_invalid_env_number_falls_back_to_file() {
    let file = Config::parse_file_config("hint_delay_ms = 10\n").expect("parses");
    let config = Config::from_file_and_env(file, |k| {
        (k == "ROZBOR_HINT_DELAY_MS").then(|| "soon".to_string())
    });
    assert_eq!(config.hint_delay_ms, 10);
}

#[test]
fn test_broken_file_is_an_error() {
    assert!(Config::parse_file_config("theme = ").is_err());
    assert!(Config::parse_file_config("mouse = \"yes\"").is_err());
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}
