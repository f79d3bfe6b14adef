//! WebShell UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The entire interface is the bundled frontend rendered inside the WebView.
//! Communication between the Rust backend and JS frontend uses wry IPC.

pub mod webview_app;
