//! Unit tests for the App core: frontend location and content URL.

use std::fs;

use tempfile::TempDir;
use webshell::app::App;
use webshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use webshell::types::errors::ShellError;

/// Builds an App whose settings point the frontend at `frontend`.
fn app_with_frontend(config: &TempDir, frontend: &std::path::Path) -> App {
    let settings_path = config.path().join("settings.json");
    let body = serde_json::json!({ "frontend_dir": frontend });
    fs::write(&settings_path, body.to_string()).unwrap();

    let mut engine = SettingsEngine::new(Some(settings_path.to_string_lossy().to_string()));
    engine.load().unwrap();
    App::new(engine)
}

#[test]
fn test_frontend_dir_from_settings() {
    let config = TempDir::new().unwrap();
    let frontend = TempDir::new().unwrap();
    let app = app_with_frontend(&config, frontend.path());

    assert_eq!(app.frontend_dir(), frontend.path());
    assert_eq!(app.index_path(), frontend.path().join("index.html"));
}

#[test]
fn test_content_url_points_at_index() {
    let config = TempDir::new().unwrap();
    let frontend = TempDir::new().unwrap();
    fs::write(frontend.path().join("index.html"), "<html></html>").unwrap();
    let app = app_with_frontend(&config, frontend.path());

    let url = app.content_url().unwrap();
    assert!(url.starts_with("file://"), "unexpected url: {}", url);
    assert!(url.ends_with("/index.html"), "unexpected url: {}", url);
}

#[test]
fn test_content_url_missing_index_is_an_error() {
    let config = TempDir::new().unwrap();
    let frontend = TempDir::new().unwrap();
    let app = app_with_frontend(&config, frontend.path());

    match app.content_url() {
        Err(ShellError::FrontendNotFound(path)) => {
            assert_eq!(path, frontend.path().join("index.html"))
        }
        other => panic!("expected FrontendNotFound, got {:?}", other),
    }
}

#[test]
fn test_default_frontend_dir_without_override() {
    let config = TempDir::new().unwrap();
    let engine = SettingsEngine::new(Some(
        config.path().join("settings.json").to_string_lossy().to_string(),
    ));
    let app = App::new(engine);

    assert_eq!(
        app.frontend_dir(),
        webshell::platform::current_frontend_dir().as_path()
    );
    assert_eq!(app.settings(), &Default::default());
}
