//! App Core for WebShell.
//!
//! Holds the loaded settings and knows where the bundled frontend lives.

use std::path::{Path, PathBuf};

use url::Url;

use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::ShellError;
use crate::types::settings::ShellSettings;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    frontend_dir: PathBuf,
}

impl App {
    /// Creates the app from an engine whose settings are already loaded.
    ///
    /// The frontend directory comes from the `frontend_dir` setting when set,
    /// otherwise from the launch mode of the running binary.
    pub fn new(settings_engine: SettingsEngine) -> Self {
        let frontend_dir = settings_engine
            .get_settings()
            .frontend_dir
            .clone()
            .unwrap_or_else(platform::current_frontend_dir);
        Self {
            settings_engine,
            frontend_dir,
        }
    }

    pub fn settings(&self) -> &ShellSettings {
        self.settings_engine.get_settings()
    }

    pub fn frontend_dir(&self) -> &Path {
        &self.frontend_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.frontend_dir.join(platform::INDEX_FILE)
    }

    /// `file://` URL of the frontend's `index.html`.
    pub fn content_url(&self) -> Result<String, ShellError> {
        let index = self.index_path();
        if !index.is_file() {
            return Err(ShellError::FrontendNotFound(index));
        }
        let absolute = index
            .canonicalize()
            .map_err(|_| ShellError::FrontendNotFound(index.clone()))?;
        Url::from_file_path(&absolute)
            .map(String::from)
            .map_err(|_| ShellError::InvalidFrontendPath(absolute))
    }
}
