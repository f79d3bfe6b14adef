//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, persistence, partial files and reset behavior.

use std::fs;

use tempfile::TempDir;
use webshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use webshell::types::errors::SettingsError;
use webshell::types::settings::ShellSettings;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, ShellSettings::default());
    assert!(
        !dir.path().join("settings.json").exists(),
        "Loading must not create the file"
    );
}

#[test]
fn test_defaults_match_shell_window() {
    let settings = ShellSettings::default();
    assert_eq!(settings.window.width, 717);
    assert_eq!(settings.window.height, 584);
    assert!(settings.window.frameless);
    assert!(!settings.window.resizable);
    assert!(settings.window.easy_drag);
    assert_eq!(settings.frontend_dir, None);
    assert_eq!(settings.log_filter, "webshell=info");
}

#[test]
fn test_save_then_load_in_new_engine() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"window": {"title": "Custom", "width": 1024}, "devtools": true}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    engine.save().unwrap();

    let mut reloaded_engine = engine_in_temp(&dir);
    let reloaded = reloaded_engine.load().unwrap();
    assert_eq!(reloaded, loaded);
    assert_eq!(reloaded.window.title, "Custom");
    assert_eq!(reloaded.window.width, 1024);
    assert!(reloaded.devtools);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"frontend_dir": "/srv/frontend", "window": {"resizable": true}}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();

    assert_eq!(
        settings.frontend_dir.as_deref(),
        Some(std::path::Path::new("/srv/frontend"))
    );
    assert!(settings.window.resizable);
    assert_eq!(settings.window.title, "WebShell");
    assert_eq!(settings.window.width, 717);
    assert_eq!(settings.log_filter, "webshell=info");
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    let err = engine.load().unwrap_err();
    assert!(matches!(err, SettingsError::SerializationError(_)));
    assert_eq!(engine.get_settings(), &ShellSettings::default());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.save().unwrap();

    assert!(path.exists());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"window": {"title": "Changed"}}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load().unwrap().window.title, "Changed");

    engine.reset().unwrap();
    assert_eq!(engine.get_settings(), &ShellSettings::default());

    let mut fresh = engine_in_temp(&dir);
    assert_eq!(fresh.load().unwrap(), ShellSettings::default());
}
