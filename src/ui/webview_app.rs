//! Native shell window using `wry` + `tao`.
//!
//! Architecture:
//! - One `tao` window hosting one `wry` webview that loads the frontend's
//!   `index.html` as a `file://` URL.
//! - `ipc::init_script` is injected on every page and exposes `window.bridge`.
//! - IPC from JS → Rust via `window.ipc.postMessage()`. The handler only parses
//!   and forwards messages as `UserEvent`s; the event loop owns the `Shell` and
//!   performs every window operation on the UI thread.

use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Fullscreen, Window, WindowBuilder};
use tracing::{debug, info, warn};
use wry::{WebView, WebViewBuilder};

use crate::app::App;
use crate::ipc::{self, IpcRequest};
use crate::services::dispatcher::Shell;
use crate::types::errors::{BridgeError, ShellError};
use crate::types::settings::ShellSettings;
use crate::window::WindowOps;

#[derive(Debug)]
enum UserEvent {
    Ipc(IpcRequest),
}

/// A `tao` window and the webview rendered into it.
pub struct NativeWindow {
    // Fields drop in order: the webview must go before its window.
    webview: WebView,
    window: Window,
}

impl WindowOps for NativeWindow {
    fn minimize(&self) -> Result<(), BridgeError> {
        self.window.set_minimized(true);
        Ok(())
    }

    fn toggle_fullscreen(&self) -> Result<(), BridgeError> {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
        } else {
            self.window
                .set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        Ok(())
    }

    fn set_on_top(&self, on_top: bool) -> Result<(), BridgeError> {
        self.window.set_always_on_top(on_top);
        Ok(())
    }

    fn start_drag(&self) -> Result<(), BridgeError> {
        self.window
            .drag_window()
            .map_err(|e| BridgeError::Window(e.to_string()))
    }

    fn evaluate_script(&self, js: &str) -> Result<(), BridgeError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| BridgeError::Window(e.to_string()))
    }

    fn close(self) {
        debug!("destroying native window");
    }
}

fn build_window(
    event_loop: &EventLoop<UserEvent>,
    settings: &ShellSettings,
    url: &str,
    proxy: EventLoopProxy<UserEvent>,
) -> Result<NativeWindow, ShellError> {
    let ws = &settings.window;
    let window = WindowBuilder::new()
        .with_title(&ws.title)
        .with_inner_size(LogicalSize::new(f64::from(ws.width), f64::from(ws.height)))
        .with_decorations(!ws.frameless)
        .with_resizable(ws.resizable)
        .build(event_loop)
        .map_err(|e| ShellError::WindowBuild(e.to_string()))?;

    let init_js = ipc::init_script(ws.easy_drag);
    let builder = WebViewBuilder::new()
        .with_url(url)
        .with_initialization_script(&init_js)
        .with_ipc_handler(move |request: wry::http::Request<String>| {
            let body = request.body().as_str();
            match IpcRequest::from_json(body) {
                Some(msg) => {
                    if proxy.send_event(UserEvent::Ipc(msg)).is_err() {
                        debug!("event loop closed, dropping ipc message");
                    }
                }
                None => {
                    let preview: String = body.chars().take(200).collect();
                    warn!(body = %preview, "ignoring malformed ipc message");
                }
            }
        })
        .with_devtools(settings.devtools);

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| ShellError::WindowBuild("missing GTK vbox".to_string()))?;
        builder
            .build_gtk(vbox)
            .map_err(|e| ShellError::WindowBuild(e.to_string()))?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder
        .build(&window)
        .map_err(|e| ShellError::WindowBuild(e.to_string()))?;

    Ok(NativeWindow { webview, window })
}

// ─── Main entry point ───

/// Opens the shell window and runs the event loop until the window closes.
///
/// Only returns on a startup error; a normal shutdown exits the process.
pub fn run(app: App) -> Result<(), ShellError> {
    let url = app.content_url()?;

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = build_window(&event_loop, app.settings(), &url, proxy)?;
    info!(url = %url, "frontend loaded");
    let mut shell = Shell::with_window(window);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                shell.close();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::Ipc(request)) => {
                ipc::handle_request(&mut shell, request);
                if shell.is_closed() {
                    *control_flow = ControlFlow::Exit;
                }
            }

            _ => {}
        }
    })
}
