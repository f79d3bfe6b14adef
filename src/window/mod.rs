//! Window abstraction for WebShell.
//!
//! `WindowOps` is the seam between the command dispatcher and the windowing
//! toolkit. The GUI build implements it on a `tao` window with its `wry`
//! webview (`ui::webview_app::NativeWindow`); `HeadlessWindow` keeps the same
//! state in memory for the console build and for tests.

pub mod headless;

pub use headless::HeadlessWindow;

use crate::types::errors::BridgeError;

/// Operations the shell performs on its native window.
///
/// All methods run on the thread that owns the window.
pub trait WindowOps {
    fn minimize(&self) -> Result<(), BridgeError>;

    /// Flips between fullscreen and windowed.
    fn toggle_fullscreen(&self) -> Result<(), BridgeError>;

    fn set_on_top(&self, on_top: bool) -> Result<(), BridgeError>;

    /// Starts moving the window with the pointer (frameless easy-drag).
    fn start_drag(&self) -> Result<(), BridgeError>;

    /// Runs a JavaScript snippet in the page context.
    fn evaluate_script(&self, js: &str) -> Result<(), BridgeError>;

    /// Destroys the window. The handle is unusable afterwards.
    fn close(self)
    where
        Self: Sized;
}
