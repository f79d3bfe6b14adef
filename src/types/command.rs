use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::BridgeError;

/// Named parameters passed alongside a command tag.
pub type Params = Map<String, Value>;

/// Status code for a command the shell carried out.
pub const CODE_OK: u16 = 200;
/// Status code for a tag the shell does not know.
pub const CODE_UNKNOWN_COMMAND: u16 = 400;

/// Window operations the frontend can request through `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Minimize,
    Quit,
    ToggleFullscreen,
    SetOnTop(bool),
}

impl Command {
    /// Every tag `parse` recognizes.
    pub const TAGS: [&'static str; 4] = ["minimize", "quit", "fullscreen", "top"];

    /// Parses a tag and its parameters.
    ///
    /// Returns `Ok(None)` for an unrecognized tag. A recognized tag with
    /// missing or mistyped parameters is an error.
    pub fn parse(tag: &str, params: &Params) -> Result<Option<Self>, BridgeError> {
        let command = match tag {
            "minimize" => Command::Minimize,
            "quit" => Command::Quit,
            "fullscreen" => Command::ToggleFullscreen,
            "top" => {
                let value = params
                    .get("isTop")
                    .ok_or_else(|| BridgeError::MissingParam("isTop".to_string()))?;
                let on_top = value.as_bool().ok_or_else(|| BridgeError::InvalidParam {
                    name: "isTop".to_string(),
                    expected: "a boolean",
                })?;
                Command::SetOnTop(on_top)
            }
            _ => return Ok(None),
        };
        Ok(Some(command))
    }

    /// The tag this command is invoked with.
    pub fn tag(&self) -> &'static str {
        match self {
            Command::Minimize => "minimize",
            Command::Quit => "quit",
            Command::ToggleFullscreen => "fullscreen",
            Command::SetOnTop(_) => "top",
        }
    }
}

/// Response returned to the frontend for every `invoke` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub code: u16,
    pub msg: String,
    pub params: Params,
}

impl InvokeResponse {
    pub fn success(tag: &str, params: Params) -> Self {
        Self {
            code: CODE_OK,
            msg: format!("success to {}", tag),
            params,
        }
    }

    pub fn unknown(tag: &str, params: Params) -> Self {
        Self {
            code: CODE_UNKNOWN_COMMAND,
            msg: format!("unknown command: {}", tag),
            params,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_OK
    }
}
