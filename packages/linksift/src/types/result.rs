//! Result types returned at the extraction boundary.
//!
//! These never carry a Rust error: failures are folded into the `error`
//! field so callers always get a well-formed result object.

use serde::{Deserialize, Serialize};

use super::category::CategoryMap;
use super::link::LinkRecord;

/// The outcome of one `extract_links` call.
///
/// Invariants: `error` is set XOR the other fields are populated, and
/// `total_count == links.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Failure message, if the fetch or parse failed
    pub error: Option<String>,

    /// Retained download links, in harvested order
    pub links: Vec<LinkRecord>,

    /// Category buckets (empty buckets dropped)
    pub categories: CategoryMap,

    /// Number of retained links
    pub total_count: usize,
}

impl ExtractionResult {
    /// Build a successful result; `total_count` is derived from `links`.
    pub fn ok(links: Vec<LinkRecord>, categories: CategoryMap) -> Self {
        Self {
            error: None,
            total_count: links.len(),
            links,
            categories,
        }
    }

    /// Build a failed result with empty link data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            links: Vec::new(),
            categories: CategoryMap::new(),
            total_count: 0,
        }
    }

    /// True when the call succeeded but nothing qualified.
    pub fn is_empty_success(&self) -> bool {
        self.error.is_none() && self.links.is_empty()
    }
}

/// Metadata recovered by a preview probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPreview {
    /// `Content-Type` header value, lower-cased
    pub content_type: String,

    /// `Content-Length` header value, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<u64>,

    /// HTTP status code of the probe
    pub status_code: u16,

    /// `<title>` text, recovered only for HTML targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Meta description, recovered only for HTML targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The outcome of one `get_link_preview` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResult {
    /// Failure message, if the probe failed
    pub error: Option<String>,

    /// The recovered preview, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<LinkPreview>,
}

impl PreviewResult {
    /// Build a successful preview result.
    pub fn ok(preview: LinkPreview) -> Self {
        Self {
            error: None,
            preview: Some(preview),
        }
    }

    /// Build a failed preview result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            preview: None,
        }
    }
}
