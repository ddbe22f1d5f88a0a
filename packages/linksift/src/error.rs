//! Typed errors for the linksift library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Errors never cross the
//! `LinkExtractor` boundary as `Err`; they are folded into the `error`
//! field of the result types there.

use thiserror::Error;

/// Errors that can occur while extracting links from a page.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Fetching the page failed
    #[error("failed to fetch webpage: {0}")]
    Fetch(#[from] FetchError),

    /// Harvesting or classification failed on the fetched markup
    #[error("failed to parse webpage: {0}")]
    Parse(#[from] ParseError),
}

/// Errors raised by the HTTP collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed even after scheme normalization
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request exceeded the configured timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Server answered with a non-2xx status
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },
}

/// Errors raised during harvesting or classification.
///
/// Harvesting is best-effort and soft-skips individual bad hrefs, so the
/// only hard parse failure is a structurally unusable document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Markup was structurally unusable
    #[error("unexpected document structure: {reason}")]
    Structure { reason: String },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
