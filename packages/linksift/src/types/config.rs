//! Client configuration for the HTTP collaborator.

use std::time::Duration;

/// Configuration for the page-fetching HTTP client.
///
/// Explicitly constructed and passed in rather than living in a
/// process-wide singleton, so tests and callers can substitute their own.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Browser-identifying User-Agent sent with every request.
    pub user_agent: String,

    /// Timeout for a full page fetch. Default: 10 seconds.
    pub fetch_timeout: Duration,

    /// Timeout for preview probes (HEAD and the HTML fallback GET).
    /// Default: 5 seconds.
    pub preview_timeout: Duration,

    /// Maximum redirects to follow. Default: 5.
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            fetch_timeout: Duration::from_secs(10),
            preview_timeout: Duration::from_secs(5),
            max_redirects: 5,
        }
    }
}

impl ClientConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the full-fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the preview-probe timeout.
    pub fn with_preview_timeout(mut self, timeout: Duration) -> Self {
        self.preview_timeout = timeout;
        self
    }

    /// Set the redirect limit.
    pub fn with_max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }
}
