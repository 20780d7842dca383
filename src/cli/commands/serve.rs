//! HTTP server command

use crate::cli::Workspace;
use crate::server;

/// Serve the API, with CLI flags overriding the `[server]` config section
pub fn serve(workspace: &Workspace, bind: Option<&str>, port: Option<u16>) -> anyhow::Result<()> {
    let bind = bind.unwrap_or(&workspace.config.server.bind);
    let port = port.unwrap_or(workspace.config.server.port);
    server::serve(workspace, bind, port)
}
