//! WebShell — a minimal desktop shell hosting a bundled web frontend.
//!
//! Entry point: loads settings, initializes logging and opens the shell window.
//! When built without the `gui` feature, runs an interactive console demo
//! against an in-memory window.

use tracing_subscriber::EnvFilter;
use webshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("webshell=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_settings() -> SettingsEngine {
    let mut engine = SettingsEngine::new(None);
    let loaded = engine.load();
    init_logging(&engine.get_settings().log_filter);
    if let Err(e) = loaded {
        tracing::warn!("Settings load failed, using defaults: {e}");
    }
    engine
}

#[cfg(feature = "gui")]
fn main() {
    let app = webshell::app::App::new(load_settings());
    tracing::info!("WebShell v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = webshell::ui::webview_app::run(app) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use serde_json::json;
    use webshell::ipc::{self, IpcRequest};
    use webshell::services::dispatcher::Shell;
    use webshell::services::push::ConsoleLevel;
    use webshell::window::HeadlessWindow;

    let app = webshell::app::App::new(load_settings());

    println!();
    println!("WebShell v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!("  Frontend: {}", app.index_path().display());
    println!();

    let mut shell = Shell::with_window(HeadlessWindow::new());

    let requests = [
        r#"{"kind":"ready"}"#,
        r#"{"kind":"invoke","id":1,"tag":"top","params":{"isTop":true}}"#,
        r#"{"kind":"invoke","id":2,"tag":"fullscreen"}"#,
        r#"{"kind":"invoke","id":3,"tag":"minimize"}"#,
        r#"{"kind":"invoke","id":4,"tag":"maximize","params":{"why":"demo"}}"#,
        r#"{"kind":"invoke","id":5,"tag":"top"}"#,
        r#"{"kind":"drag"}"#,
    ];
    for raw in requests {
        println!("  page -> {}", raw);
        match IpcRequest::from_json(raw) {
            Some(request) => ipc::handle_request(&mut shell, request),
            None => println!("  (malformed, dropped)"),
        }
    }

    shell.send_message("hello from the backend");
    shell.send_command("refresh", &json!({"page": 1}).as_object().cloned().unwrap_or_default());
    shell.log_to_console(ConsoleLevel::Info, "demo finished");

    if let Some(window) = shell.window() {
        println!();
        println!(
            "  minimized={} fullscreen={} on_top={} drags={}",
            window.is_minimized(),
            window.is_fullscreen(),
            window.is_on_top(),
            window.drag_count()
        );
        println!("  Scripts evaluated in the page:");
        for js in window.scripts() {
            println!("    {}", js);
        }
    }

    ipc::handle_request(
        &mut shell,
        IpcRequest::Invoke {
            id: 6,
            tag: "quit".to_string(),
            params: Default::default(),
        },
    );
    println!();
    println!("  quit -> window closed: {}", shell.is_closed());
}
