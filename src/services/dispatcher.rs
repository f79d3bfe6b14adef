//! Command dispatcher for WebShell.
//!
//! `Shell` owns the native window and is the only code that touches it. The
//! frontend reaches it through `invoke`; the backend pushes into the page
//! through `send_command`, `send_message` and `log_to_console`.

use tracing::{debug, error, info, warn};

use crate::services::push::{self, ConsoleLevel};
use crate::types::command::{Command, InvokeResponse, Params};
use crate::types::errors::BridgeError;
use crate::window::WindowOps;

/// Owner of the shell's single window.
pub struct Shell<W: WindowOps> {
    window: Option<W>,
    closed: bool,
}

impl<W: WindowOps> Shell<W> {
    /// Creates a shell with no window yet.
    pub fn new() -> Self {
        Self {
            window: None,
            closed: false,
        }
    }

    /// Creates a shell that already owns `window`.
    pub fn with_window(window: W) -> Self {
        Self {
            window: Some(window),
            closed: false,
        }
    }

    /// Hands the window to the shell. Replaces any window attached earlier.
    pub fn attach(&mut self, window: W) {
        self.window = Some(window);
        self.closed = false;
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    /// True once `quit` (or `close`) has destroyed the window.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn require_window(&self) -> Result<&W, BridgeError> {
        match &self.window {
            Some(w) => Ok(w),
            None if self.closed => Err(BridgeError::WindowClosed),
            None => Err(BridgeError::WindowNotCreated),
        }
    }

    /// Dispatches a frontend command.
    ///
    /// Unknown tags produce a 400 response with no side effect. Known tags
    /// perform exactly one window operation and produce a 200 response. In
    /// both cases `params` is echoed back unchanged.
    pub fn invoke(&mut self, tag: &str, params: Params) -> Result<InvokeResponse, BridgeError> {
        self.require_window()?;

        let command = match Command::parse(tag, &params)? {
            Some(command) => command,
            None => {
                warn!(tag, "unknown command");
                return Ok(InvokeResponse::unknown(tag, params));
            }
        };

        match command {
            Command::Minimize => self.require_window()?.minimize()?,
            Command::ToggleFullscreen => self.require_window()?.toggle_fullscreen()?,
            Command::SetOnTop(on_top) => self.require_window()?.set_on_top(on_top)?,
            Command::Quit => self.close(),
        }

        debug!(tag, "command dispatched");
        Ok(InvokeResponse::success(tag, params))
    }

    /// Destroys the window. Later calls fail with `WindowClosed`.
    pub fn close(&mut self) {
        if let Some(window) = self.window.take() {
            window.close();
            self.closed = true;
            info!("window closed");
        }
    }

    /// Pushes a command to the frontend's `handlePythonCommand`.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn send_command(&self, command: &str, params: &Params) {
        let js = push::command_script(command, params);
        match self.eval(&js) {
            Ok(()) => info!(command, params = params.len(), "command pushed to frontend"),
            Err(e) => error!(command, "failed to push command to frontend: {}", e),
        }
    }

    /// Pushes a plain message to the frontend's `handlePythonMessage`.
    pub fn send_message(&self, message: &str) {
        if let Err(e) = self.eval(&push::message_script(message)) {
            error!("failed to push message to frontend: {}", e);
        }
    }

    /// Writes `message` to the page's developer console.
    pub fn log_to_console(&self, level: ConsoleLevel, message: &str) {
        if let Err(e) = self.eval(&push::console_script(level, message)) {
            error!(level = level.as_str(), "failed to log to page console: {}", e);
        }
    }

    /// Evaluates a raw snippet in the page.
    pub fn eval(&self, js: &str) -> Result<(), BridgeError> {
        self.require_window()?.evaluate_script(js)
    }
}

impl<W: WindowOps> Default for Shell<W> {
    fn default() -> Self {
        Self::new()
    }
}
