//! SEC filings web server
//!
//! Serves the browser UI and the `/api/filings` endpoint. Configuration is
//! read from the environment (see `sec_filings::config`).

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sec_filings::api::{create_router, AppState};
use sec_filings::FilingsConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sec_filings=debug,filings_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = FilingsConfig::from_env().context("Invalid configuration")?;
    let state = AppState::from_config(&config).context("Failed to create SEC EDGAR client")?;
    let app = create_router(state, &config.server.static_dir);

    let addr = config.server.bind_addr;
    tracing::info!("SEC filings server running on http://{}", addr);
    tracing::info!("  Upstream:       {}", config.sec.api_base);
    tracing::info!("  Default CIK:    {}", config.paging.default_cik);
    tracing::info!("  Static files:   {}", config.server.static_dir.display());
    tracing::info!("API Endpoints:");
    tracing::info!("  /api/filings   - Filings for ?cik=&group=&year=&page=&per_page=");
    tracing::info!("  /api/health    - Health check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
