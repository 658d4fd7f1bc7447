use search_service::config::{ServerConfig, DEFAULT_LOG_FILTER};
use search_service::routes::search::Source;
use search_service::services::goodreads::GoodreadsAdapter;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env();
    let source: Source = Arc::new(GoodreadsAdapter::new(config.upstream.clone())?);

    let addr = config.bind_addr();
    info!("Search service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, search_service::app(source)).await?;

    Ok(())
}
