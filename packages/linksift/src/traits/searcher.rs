//! Site search trait for the movie-title search surface.
//!
//! The web UI exposes a keyword search backed by a third-party aggregator
//! site. That scrape is an external collaborator, not part of this core,
//! so only the seam is defined here: the server consumes a
//! `dyn SiteSearcher`, and deployments plug in their own implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use crate::error::FetchResult;

/// One hit from a keyword search against the target site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page URL for the hit
    pub url: String,

    /// Display title
    pub title: String,

    /// Poster/thumbnail image URL, if the site exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl SearchHit {
    /// Create a hit without a poster.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            poster: None,
        }
    }

    /// Set the poster URL.
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }
}

/// Keyword search against a third-party site.
#[async_trait]
pub trait SiteSearcher: Send + Sync {
    /// Search the target site for a free-text keyword.
    async fn search(&self, keyword: &str) -> FetchResult<Vec<SearchHit>>;
}

/// Mock searcher for tests: canned hits plus call recording.
#[derive(Default)]
pub struct MockSearcher {
    hits: Arc<RwLock<Vec<SearchHit>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSearcher {
    /// Create an empty mock searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-configure the hits every search returns.
    pub fn with_hits(self, hits: Vec<SearchHit>) -> Self {
        *self.hits.write().unwrap() = hits;
        self
    }

    /// Keywords that have been searched, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl SiteSearcher for MockSearcher {
    async fn search(&self, keyword: &str) -> FetchResult<Vec<SearchHit>> {
        self.calls.write().unwrap().push(keyword.to_string());
        Ok(self.hits.read().unwrap().clone())
    }
}
