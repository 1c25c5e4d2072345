//! Portfolio Insights server entry point.

use tracing::{error, info};

use portfolio_insights_server::{init_tracing, Server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional TOML config path as the first argument
    let config = ServerConfig::load(std::env::args().nth(1))?;
    init_tracing(config.log_format);

    info!("Portfolio Insights Server v{}", env!("CARGO_PKG_VERSION"));

    let server = match Server::from_config(config) {
        Ok(server) => server,
        Err(e) => {
            error!("Cannot serve portfolio: {}", e);
            return Err(e.into());
        }
    };

    server.start().await?;
    Ok(())
}
