//! Aperitif MCP server binary.
//!
//! Serves the cocktail aesthetics tools over stdio. Logs go to stderr so
//! stdout stays reserved for the MCP transport; set `RUST_LOG` to adjust
//! verbosity.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aperitif_mcp::AestheticsServer;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let server = AestheticsServer::new();
    info!(
        profiles = server.catalog().len(),
        "loaded cocktail aesthetics catalog"
    );

    server.run_stdio().await
}
