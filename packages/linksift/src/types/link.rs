//! Link records - one discovered reference per record.

use serde::{Deserialize, Serialize};

/// The HTML construct a link record was harvested from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkSource {
    /// A plain `<a href>` element
    #[default]
    Anchor,
    /// Extracted from an inline `onclick` navigation script
    Javascript,
    /// An image wrapped in an anchor that resembles a download button
    ImageLink,
}

/// One discovered hyperlink-like reference.
///
/// `url` is always absolute; it is resolved against the page's base URL
/// during harvesting and serves as the dedup key for the image-link pass.
/// `original_href` keeps the raw attribute value for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Absolute URL, resolved against the page base
    pub url: String,

    /// Raw `href` as authored; may be relative
    pub original_href: String,

    /// Best-effort human-readable label
    pub text: String,

    /// `title` attribute, verbatim
    #[serde(default)]
    pub title: String,

    /// `target` attribute, verbatim
    #[serde(default)]
    pub target: String,

    /// `rel` tokens, in document order
    #[serde(default)]
    pub rel: Vec<String>,

    /// `class` tokens, in document order
    #[serde(default)]
    pub class: Vec<String>,

    /// Which harvesting pass produced this record
    #[serde(default, rename = "type")]
    pub source: LinkSource,
}

impl LinkRecord {
    /// Create a record with the required fields; attributes default empty.
    pub fn new(
        url: impl Into<String>,
        original_href: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            original_href: original_href.into(),
            text: text.into(),
            title: String::new(),
            target: String::new(),
            rel: Vec::new(),
            class: Vec::new(),
            source: LinkSource::Anchor,
        }
    }

    /// Set the `title` attribute.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the `target` attribute.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the `rel` token list.
    pub fn with_rel(mut self, rel: Vec<String>) -> Self {
        self.rel = rel;
        self
    }

    /// Set the `class` token list.
    pub fn with_class(mut self, class: Vec<String>) -> Self {
        self.class = class;
        self
    }

    /// Set the harvesting source.
    pub fn with_source(mut self, source: LinkSource) -> Self {
        self.source = source;
        self
    }
}
