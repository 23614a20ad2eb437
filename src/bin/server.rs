use coauthor_network::{
    Config,
    server::{self, AppState},
};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coauthor_network=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config.openalex)?;
    tracing::info!(openalex = %config.openalex.base_url, "Starting co-author network server");

    server::serve(SocketAddr::new(config.host, config.port), state)
        .await
        .inspect_err(|e| tracing::error!("Server error: {e:?}"))?;

    Ok(())
}
