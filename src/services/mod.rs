// WebShell services
// Command dispatch, frontend pushes and settings persistence.

pub mod dispatcher;
pub mod push;
pub mod settings_engine;
