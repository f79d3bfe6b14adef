//! In-memory window used when no GUI toolkit is compiled in.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::WindowOps;
use crate::types::errors::BridgeError;

/// A window with no native surface. Tracks the state a real window would
/// expose and records every script it is asked to evaluate.
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    minimized: Cell<bool>,
    fullscreen: Cell<bool>,
    on_top: Cell<bool>,
    drags: Cell<usize>,
    scripts: RefCell<Vec<String>>,
    closed: Rc<Cell<bool>>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized.get()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    pub fn is_on_top(&self) -> bool {
        self.on_top.get()
    }

    /// Number of drag gestures started.
    pub fn drag_count(&self) -> usize {
        self.drags.get()
    }

    /// Scripts evaluated so far, oldest first.
    pub fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }

    /// Returns a flag that flips to `true` once the window is closed.
    ///
    /// Lets a caller observe the close after handing ownership to a shell.
    pub fn closed_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.closed)
    }
}

impl WindowOps for HeadlessWindow {
    fn minimize(&self) -> Result<(), BridgeError> {
        self.minimized.set(true);
        Ok(())
    }

    fn toggle_fullscreen(&self) -> Result<(), BridgeError> {
        self.fullscreen.set(!self.fullscreen.get());
        Ok(())
    }

    fn set_on_top(&self, on_top: bool) -> Result<(), BridgeError> {
        self.on_top.set(on_top);
        Ok(())
    }

    fn start_drag(&self) -> Result<(), BridgeError> {
        self.drags.set(self.drags.get() + 1);
        Ok(())
    }

    fn evaluate_script(&self, js: &str) -> Result<(), BridgeError> {
        self.scripts.borrow_mut().push(js.to_string());
        Ok(())
    }

    fn close(self) {
        self.closed.set(true);
    }
}
