use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mercado_core::config::Config;
use mercado_core::protocol::{self, AppState};
use mercado_core::services::upstream;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let client = upstream::build_client(config.upstream_timeout_secs)?;

    let bind = config.bind.clone();
    let state = Arc::new(AppState { client, config });

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("listening on http://{}", bind);

    axum::serve(listener, protocol::router(state)).await?;

    Ok(())
}
