//! Application setup and router construction.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use linksift::{LinkExtractor, PageSource, SiteSearcher};

use crate::routes::{api_extract_handler, extract_handler, health_handler, index_handler, search_handler};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<LinkExtractor<Box<dyn PageSource>>>,
    pub searcher: Arc<dyn SiteSearcher>,
}

impl AppState {
    /// Build state from a page source and a site searcher.
    pub fn new(source: Box<dyn PageSource>, searcher: Arc<dyn SiteSearcher>) -> Self {
        Self {
            extractor: Arc::new(LinkExtractor::new(source)),
            searcher,
        }
    }
}

/// Build the Axum application router.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/extract", post(extract_handler))
        .route("/api/extract", post(api_extract_handler))
        .route("/search", post(search_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
