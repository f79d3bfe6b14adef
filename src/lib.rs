//! WebShell — a minimal desktop shell hosting a bundled web frontend.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod ipc;
pub mod platform;
pub mod services;
pub mod types;
pub mod window;

#[cfg(feature = "gui")]
pub mod ui;
