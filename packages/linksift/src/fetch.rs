//! HTTP page fetcher - the production [`PageSource`] implementation.
//!
//! One reqwest client is built per fetcher and reused across calls for
//! connection pooling; nothing else is shared between invocations.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::traits::source::{FetchedPage, PageSource, ProbeResponse};
use crate::types::ClientConfig;

/// Reqwest-backed page source with browser-identifying headers, fixed
/// timeouts, and a limited redirect policy.
pub struct HttpFetcher {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpFetcher {
    /// Build a fetcher from an explicit client configuration.
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .parse()
                .expect("static header value"),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            "en-US,en;q=0.5".parse().expect("static header value"),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self { client, config })
    }

    /// Normalize a user-supplied URL: default the scheme to `https://`
    /// when missing.
    pub fn normalize_url(url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }

    fn classify_error(err: reqwest::Error, url: &str) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Http(Box::new(err))
        }
    }

    async fn get_with_timeout(&self, url: &str, timeout: Duration) -> FetchResult<FetchedPage> {
        debug!(url = %url, timeout_secs = timeout.as_secs(), "GET starting");
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "GET failed");
                Self::classify_error(e, url)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_lowercase());

        let html = response
            .text()
            .await
            .map_err(|e| Self::classify_error(e, url))?;

        Ok(FetchedPage {
            url: final_url,
            html,
            content_type,
            status: status.as_u16(),
            fetched_at: Utc::now(),
        })
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        self.get_with_timeout(url, self.config.fetch_timeout).await
    }

    async fn fetch_preview(&self, url: &str) -> FetchResult<FetchedPage> {
        self.get_with_timeout(url, self.config.preview_timeout).await
    }

    async fn probe(&self, url: &str) -> FetchResult<ProbeResponse> {
        debug!(url = %url, "HEAD probe starting");
        let response = self
            .client
            .head(url)
            .timeout(self.config.preview_timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HEAD probe failed");
                Self::classify_error(e, url)
            })?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_lowercase());

        let content_length = response
            .headers()
            .get(reqwest::header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());

        Ok(ProbeResponse {
            status: response.status().as_u16(),
            content_type,
            content_length,
        })
    }
}
