//! Page source trait - the seam between extraction and the HTTP client.
//!
//! The extractor only needs two operations: fetch a page body and probe a
//! URL's headers. Abstracting them lets tests run against canned pages
//! (see [`crate::testing::MockFetcher`]) while production uses
//! [`crate::fetch::HttpFetcher`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchResult;

/// A fetched page body plus the response metadata the extractor cares
/// about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,

    /// Raw response body
    pub html: String,

    /// `Content-Type` header, lower-cased, if present
    pub content_type: Option<String>,

    /// HTTP status code
    pub status: u16,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a page fetched now with a 200 status.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            content_type: Some("text/html".to_string()),
            status: 200,
            fetched_at: Utc::now(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

/// Headers-only response from a HEAD probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// HTTP status code
    pub status: u16,

    /// `Content-Type` header, lower-cased, if present
    pub content_type: Option<String>,

    /// `Content-Length` header, if present and numeric
    pub content_length: Option<u64>,
}

impl ProbeResponse {
    /// Create a 200 probe response.
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.into()),
            content_length: None,
        }
    }

    /// Set the content length.
    pub fn with_content_length(mut self, length: u64) -> Self {
        self.content_length = Some(length);
        self
    }

    /// Set the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// True when the target is an HTML document.
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("text/html"))
            .unwrap_or(false)
    }
}

/// Source of pages for the extractor.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a page body with the full-fetch timeout.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Probe a URL's headers with the preview timeout.
    async fn probe(&self, url: &str) -> FetchResult<ProbeResponse>;

    /// Fetch a page body with the preview timeout (used by the preview
    /// fetcher's HTML fallback).
    async fn fetch_preview(&self, url: &str) -> FetchResult<FetchedPage>;
}

#[async_trait]
impl PageSource for Box<dyn PageSource> {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        (**self).fetch(url).await
    }

    async fn probe(&self, url: &str) -> FetchResult<ProbeResponse> {
        (**self).probe(url).await
    }

    async fn fetch_preview(&self, url: &str) -> FetchResult<FetchedPage> {
        (**self).fetch_preview(url).await
    }
}
