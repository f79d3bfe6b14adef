use std::path::PathBuf;

use thiserror::Error;

// === BridgeError ===

/// Errors raised while dispatching a frontend `invoke` call.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// `invoke` was called before a window was attached to the shell.
    #[error("Window has not been created")]
    WindowNotCreated,
    /// The window was destroyed by a previous `quit` command.
    #[error("Window has been closed")]
    WindowClosed,
    /// A required command parameter was not supplied.
    #[error("Missing parameter: {0}")]
    MissingParam(String),
    /// A command parameter had the wrong JSON type.
    #[error("Invalid parameter '{name}': expected {expected}")]
    InvalidParam {
        name: String,
        expected: &'static str,
    },
    /// The toolkit rejected a window or script operation.
    #[error("Window operation failed: {0}")]
    Window(String),
}

// === SettingsError ===

/// Errors related to loading and saving shell settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
}

// === ShellError ===

/// Startup errors for the shell application.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The frontend entry page does not exist.
    #[error("Frontend not found: {}", .0.display())]
    FrontendNotFound(PathBuf),
    /// The frontend path could not be turned into a file URL.
    #[error("Invalid frontend path: {}", .0.display())]
    InvalidFrontendPath(PathBuf),
    /// Window or webview construction failed.
    #[error("Failed to build window: {0}")]
    WindowBuild(String),
}
