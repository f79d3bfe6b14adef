//! Backend-to-frontend push scripts.
//!
//! Each builder returns a JavaScript snippet that calls a global handler the
//! frontend defines. Handlers that are missing are skipped in the page; the
//! command handler additionally reports its absence on the page console.
//! Strings and parameters are embedded as JSON literals.

use serde_json::Value;

use crate::types::command::Params;

/// Global the frontend defines to receive commands.
pub const COMMAND_HANDLER: &str = "handlePythonCommand";
/// Global the frontend defines to receive plain messages.
pub const MESSAGE_HANDLER: &str = "handlePythonMessage";

/// Browser console method used by `console_script`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleLevel {
    #[default]
    Log,
    Info,
    Warn,
    Error,
    Debug,
}

impl ConsoleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleLevel::Log => "log",
            ConsoleLevel::Info => "info",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
            ConsoleLevel::Debug => "debug",
        }
    }
}

fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Builds `handlePythonCommand(command, params)` guarded by an existence check.
pub fn command_script(command: &str, params: &Params) -> String {
    let params_json = Value::Object(params.clone()).to_string();
    format!(
        "if (window.{h}) {{ window.{h}({cmd}, {params}); }} else {{ console.error({missing}); }}",
        h = COMMAND_HANDLER,
        cmd = js_string(command),
        params = params_json,
        missing = js_string(&format!("window.{} is not defined", COMMAND_HANDLER)),
    )
}

/// Builds `handlePythonMessage(message)` guarded by an existence check.
pub fn message_script(message: &str) -> String {
    format!(
        "if (window.{h}) {{ window.{h}({msg}); }}",
        h = MESSAGE_HANDLER,
        msg = js_string(message),
    )
}

/// Builds `console.<level>(message)`.
pub fn console_script(level: ConsoleLevel, message: &str) -> String {
    format!("console.{}({});", level.as_str(), js_string(message))
}
