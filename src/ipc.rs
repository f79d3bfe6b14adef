//! IPC protocol between the page and the shell.
//!
//! - **JS -> Rust**: `window.bridge.invoke(tag, params)` posts an
//!   [`IpcRequest::Invoke`] through `window.ipc.postMessage` and returns a
//!   promise. The page also posts `ready` once its DOM is loaded and, with
//!   easy-drag enabled, `drag` on a mousedown outside interactive elements.
//! - **Rust -> JS**: the shell settles the promise by evaluating
//!   [`resolve_script`] or [`reject_script`].

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::services::dispatcher::Shell;
use crate::types::command::{InvokeResponse, Params};
use crate::window::WindowOps;

/// A message posted by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IpcRequest {
    /// A call to `window.bridge.invoke`.
    Invoke {
        id: u64,
        tag: String,
        #[serde(default)]
        params: Params,
    },
    /// The page finished loading its DOM.
    Ready,
    /// The user pressed the mouse on a draggable area.
    Drag,
}

impl IpcRequest {
    /// Parses a raw `postMessage` body. Returns `None` for anything malformed.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

const BRIDGE_JS: &str = r#"
(function () {
    if (window.bridge) { return; }
    var pending = {};
    var nextId = 1;
    function post(msg) { window.ipc.postMessage(JSON.stringify(msg)); }
    window.bridge = {
        invoke: function (tag, params) {
            var id = nextId++;
            var args = (params && typeof params === 'object' && !Array.isArray(params)) ? params : {};
            return new Promise(function (resolve, reject) {
                pending[id] = { resolve: resolve, reject: reject };
                post({ kind: 'invoke', id: id, tag: String(tag), params: args });
            });
        }
    };
    window.__bridge_resolve = function (id, response) {
        var p = pending[id];
        if (p) { delete pending[id]; p.resolve(response); }
    };
    window.__bridge_reject = function (id, error) {
        var p = pending[id];
        if (p) { delete pending[id]; p.reject(new Error(error)); }
    };
    function ready() { post({ kind: 'ready' }); }
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', ready);
    } else {
        ready();
    }
})();
"#;

const EASY_DRAG_JS: &str = r#"
(function () {
    var interactive = 'input,textarea,select,button,a,label,[contenteditable],[data-no-drag]';
    document.addEventListener('mousedown', function (e) {
        if (e.button !== 0 || e.detail > 1) { return; }
        if (e.target.closest && e.target.closest(interactive)) { return; }
        window.ipc.postMessage(JSON.stringify({ kind: 'drag' }));
    });
})();
"#;

/// Script injected into every page before it loads.
pub fn init_script(easy_drag: bool) -> String {
    let mut js = String::from(BRIDGE_JS);
    if easy_drag {
        js.push_str(EASY_DRAG_JS);
    }
    js
}

/// Resolves the pending `invoke` promise `id` with `response`.
pub fn resolve_script(id: u64, response: &InvokeResponse) -> String {
    let body = serde_json::to_string(response).unwrap_or_else(|_| "null".to_string());
    format!("window.__bridge_resolve({}, {});", id, body)
}

/// Rejects the pending `invoke` promise `id` with `error`.
pub fn reject_script(id: u64, error: &str) -> String {
    format!(
        "window.__bridge_reject({}, {});",
        id,
        Value::String(error.to_string())
    )
}

/// Applies a page message to the shell.
///
/// Invoke calls are dispatched and their promise settled in the page. A
/// `quit` leaves nothing to reply to. `ready` is answered with a `ready`
/// command carrying the shell version.
pub fn handle_request<W: WindowOps>(shell: &mut Shell<W>, request: IpcRequest) {
    match request {
        IpcRequest::Invoke { id, tag, params } => {
            let reply = match shell.invoke(&tag, params) {
                Ok(response) => resolve_script(id, &response),
                Err(e) => {
                    warn!(tag = %tag, "invoke rejected: {}", e);
                    reject_script(id, &e.to_string())
                }
            };
            if shell.is_closed() {
                return;
            }
            if let Err(e) = shell.eval(&reply) {
                debug!(id, "could not settle invoke promise: {}", e);
            }
        }
        IpcRequest::Ready => {
            let mut params = Params::new();
            params.insert(
                "version".to_string(),
                Value::String(env!("CARGO_PKG_VERSION").to_string()),
            );
            shell.send_command("ready", &params);
        }
        IpcRequest::Drag => {
            if let Some(window) = shell.window() {
                if let Err(e) = window.start_drag() {
                    debug!("drag failed: {}", e);
                }
            }
        }
    }
}
