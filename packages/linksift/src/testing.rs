//! Mock page source for testing.
//!
//! Canned pages and probe responses indexed by URL, with call recording,
//! so extractor and server tests run without a network.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::traits::source::{FetchedPage, PageSource, ProbeResponse};

/// Mock [`PageSource`] backed by canned responses.
///
/// Unknown URLs fail the way an unreachable host would, so error paths
/// are exercised by simply not configuring a page.
#[derive(Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, FetchedPage>>>,
    probes: Arc<RwLock<HashMap<String, ProbeResponse>>>,
    fetch_calls: Arc<RwLock<Vec<String>>>,
    probe_calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create an empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an HTML page for `url`; the probe for that URL reports
    /// `text/html` so preview fallbacks run.
    pub fn with_html(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        self.pages
            .write()
            .unwrap()
            .insert(url.clone(), FetchedPage::new(url.clone(), html));
        self.probes
            .write()
            .unwrap()
            .insert(url, ProbeResponse::new("text/html"));
        self
    }

    /// Register a full fetched page.
    pub fn with_page(self, page: FetchedPage) -> Self {
        self.pages.write().unwrap().insert(page.url.clone(), page);
        self
    }

    /// Register a probe response for `url`.
    pub fn with_probe(self, url: impl Into<String>, probe: ProbeResponse) -> Self {
        self.probes.write().unwrap().insert(url.into(), probe);
        self
    }

    /// URLs fetched so far, in call order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// URLs probed so far, in call order.
    pub fn probe_calls(&self) -> Vec<String> {
        self.probe_calls.read().unwrap().clone()
    }

    fn unreachable(url: &str) -> FetchError {
        FetchError::Http(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            format!("mock: no page configured for {url}"),
        )))
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            probes: Arc::clone(&self.probes),
            fetch_calls: Arc::clone(&self.fetch_calls),
            probe_calls: Arc::clone(&self.probe_calls),
        }
    }
}

#[async_trait]
impl PageSource for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        self.fetch_calls.write().unwrap().push(url.to_string());
        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| Self::unreachable(url))
    }

    async fn fetch_preview(&self, url: &str) -> FetchResult<FetchedPage> {
        self.fetch(url).await
    }

    async fn probe(&self, url: &str) -> FetchResult<ProbeResponse> {
        self.probe_calls.write().unwrap().push(url.to_string());
        self.probes
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| Self::unreachable(url))
    }
}
