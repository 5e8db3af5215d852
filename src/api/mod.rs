//! REST API for the filings browser
//!
//! Routes:
//! - GET /api/filings  - see [`filings_routes::get_filings`]
//! - GET /api/health   - liveness
//! - everything else   - static UI from the configured directory

pub mod filings_routes;

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::{FilingsConfig, PagingConfig};
use crate::error::FilingsError;
use crate::filings::{ArchiveLinks, FilingsService};
use crate::sec_edgar::{FilingSource, SecEdgarClient};

pub use filings_routes::{get_filings, health_check, FilingsParams};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FilingsService>,
    pub paging: PagingConfig,
}

impl AppState {
    pub fn new(service: Arc<FilingsService>, paging: PagingConfig) -> Self {
        Self { service, paging }
    }

    /// Wire the production SEC EDGAR source from configuration
    pub fn from_config(config: &FilingsConfig) -> Result<Self, FilingsError> {
        let client = SecEdgarClient::new(&config.sec)?;
        Ok(Self::with_source(Arc::new(client), config))
    }

    /// Wire an arbitrary filing source (used by tests)
    pub fn with_source(source: Arc<dyn FilingSource>, config: &FilingsConfig) -> Self {
        let links = ArchiveLinks::new(config.sec.archives_base.clone());
        let service = Arc::new(FilingsService::new(source, links));
        Self::new(service, config.paging.clone())
    }
}

/// API routes only
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/filings", get(get_filings))
        .with_state(state)
}

/// API routes, static UI fallback, tracing and CORS
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    create_api_router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
}
