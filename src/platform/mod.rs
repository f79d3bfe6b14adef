// WebShell platform abstraction
// Config paths per OS and the location of the bundled frontend.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::{Path, PathBuf};

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Name of the page the shell loads from the frontend directory.
pub const INDEX_FILE: &str = "index.html";

/// Returns the platform-specific configuration directory for WebShell.
///
/// - **Linux**: `~/.config/webshell` (or `$XDG_CONFIG_HOME/webshell`)
/// - **macOS**: `~/Library/Application Support/WebShell`
/// - **Windows**: `%APPDATA%/WebShell`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// How the running binary was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Shipped executable; the frontend sits next to it.
    Packaged,
    /// Built from the source tree; the frontend is the crate's `dist/` build output.
    Source,
}

impl LaunchMode {
    /// Release builds are treated as packaged, debug builds as source builds.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            LaunchMode::Source
        } else {
            LaunchMode::Packaged
        }
    }
}

/// Resolves the directory holding the frontend's `index.html`.
pub fn frontend_dir(mode: LaunchMode, exe_path: &Path, source_root: &Path) -> PathBuf {
    match mode {
        LaunchMode::Packaged => exe_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        LaunchMode::Source => source_root.join("dist"),
    }
}

/// Resolves the frontend directory for the running binary.
pub fn current_frontend_dir() -> PathBuf {
    let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
    frontend_dir(
        LaunchMode::current(),
        &exe,
        Path::new(env!("CARGO_MANIFEST_DIR")),
    )
}
