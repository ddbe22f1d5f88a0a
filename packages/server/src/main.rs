// Main entry point for the linksift web service

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linksift::{ClientConfig, HttpFetcher, MockSearcher, PageSource};
use server_core::{build_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,linksift=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting linksift web service");

    let config = Config::from_env().context("Failed to load configuration")?;

    let fetcher = HttpFetcher::new(ClientConfig::default())
        .context("Failed to create HTTP fetcher")?;
    // No real third-party search implementation ships; deployments swap
    // in their own SiteSearcher here.
    let searcher = Arc::new(MockSearcher::new());

    let state = AppState::new(Box::new(fetcher) as Box<dyn PageSource>, searcher);
    let app = build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
