//! Tests for loading the engine config.

use std::path::PathBuf;
use tempfile::TempDir;
use tictactoe_minimax::{EngineConfig, Player};

/// Writes `content` to a config file inside a fresh temp dir.
///
/// The dir is returned so it lives as long as the test needs the file.
fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tictactoe.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = write_config(
        r#"
search_depth = 9
automated_mark = "X"
move_delay_ms = 250
result_delay_ms = 0
"#,
    );

    let config = EngineConfig::from_file(&path).unwrap();
    assert_eq!(*config.search_depth(), 9);
    assert_eq!(*config.automated_mark(), Player::X);
    assert_eq!(*config.move_delay_ms(), 250);
    assert_eq!(*config.result_delay_ms(), 0);
    assert_eq!(*config.engine().max_depth(), 9);
}

#[test]
fn test_missing_fields_use_defaults() {
    let (_dir, path) = write_config("search_depth = 4\n");
    let config = EngineConfig::from_file(&path).unwrap();
    assert_eq!(*config.search_depth(), 4);
    assert_eq!(*config.automated_mark(), Player::O);
    assert_eq!(*config.move_delay_ms(), 1000);
}

#[test]
fn test_depth_above_nine_rejected() {
    let (_dir, path) = write_config("search_depth = 12\n");
    let err = EngineConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("search_depth"));
}

#[test]
fn test_unknown_field_rejected() {
    let (_dir, path) = write_config("difficulty = \"hard\"\n");
    let err = EngineConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, EngineConfig::default());
}
