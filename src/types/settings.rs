use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    pub window: WindowSettings,
    /// Enables the webview's developer tools.
    pub devtools: bool,
    /// Overrides the directory `index.html` is loaded from.
    pub frontend_dir: Option<PathBuf>,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            devtools: cfg!(debug_assertions),
            frontend_dir: None,
            log_filter: "webshell=info".to_string(),
        }
    }
}

/// Native window creation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    /// Logical inner width, including the frontend's own chrome.
    pub width: u32,
    pub height: u32,
    /// Hides the native title bar and borders.
    pub frameless: bool,
    pub resizable: bool,
    /// Lets the user drag the window by any non-interactive page element.
    pub easy_drag: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "WebShell".to_string(),
            width: 701 + 16,
            height: 548 + 36,
            frameless: true,
            resizable: false,
            easy_drag: true,
        }
    }
}
