// WebShell config path for Linux
// Config: $XDG_CONFIG_HOME/webshell or ~/.config/webshell

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for WebShell on Linux.
pub fn get_config_dir() -> PathBuf {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}

fn config_dir_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join("webshell"),
        None => {
            let home = home.unwrap_or_else(|| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("webshell")
        }
    }
}
