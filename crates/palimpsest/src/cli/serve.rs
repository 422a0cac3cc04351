//! Serve command handler.

use palimpsest_error::PalimpsestResult;
use palimpsest_server::ServerConfig;
use tracing::info;

/// Handle the `serve` command
pub async fn handle_serve_command() -> PalimpsestResult<()> {
    let config = ServerConfig::from_env()?;
    super::init_tracing(*config.debug());

    info!(model = %config.model(), "Starting rewriting service");
    palimpsest_server::run(config).await
}
