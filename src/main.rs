use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentimeter::config::Config;
use sentimeter::report::ChartRenderer;
use sentimeter::sentiment;
use sentimeter::server::{self, AppState};
use sentimeter::store::sqlite::SqliteStore;
use sentimeter::store::RecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let model = sentiment::create_sentiment_model(&config)?;
    let store = Arc::new(SqliteStore::new(&config.db_path)?);
    info!(
        "Record store ready at {} ({} records)",
        config.db_path.display(),
        store.count().await?
    );

    let charts = Arc::new(ChartRenderer::new(&config.output_dir)?);

    let state = AppState {
        model,
        store,
        charts,
    };
    let app = server::router(state, &config.output_dir);

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Server error: {}", e);
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    server_handle.abort();
    info!("Shutdown complete");

    Ok(())
}
