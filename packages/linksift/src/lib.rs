//! Download-Link Harvesting and Classification
//!
//! Fetches a web page, harvests hyperlink-like references from its markup,
//! and classifies them with layered textual/domain/extension heuristics.
//! The primary path surfaces only the strict "download" subset; a looser
//! multi-label categorizer is kept as an alternate general-purpose view.
//!
//! # Design Philosophy
//!
//! - Over-collect in the harvester, decide in the classifier
//! - Heuristic and best-effort: pattern matching, not a grammar
//! - False negatives beat false positives on the strict path
//! - Vocabularies are named tables, not inline literals
//! - One pass, no retries, no state between calls
//!
//! # Usage
//!
//! ```rust,ignore
//! use linksift::{ClientConfig, HttpFetcher, LinkExtractor};
//!
//! let fetcher = HttpFetcher::new(ClientConfig::default())?;
//! let extractor = LinkExtractor::new(fetcher);
//!
//! let result = extractor.extract_links("example.com/some-page").await;
//! if let Some(err) = &result.error {
//!     eprintln!("extraction failed: {err}");
//! } else {
//!     println!("{} download links", result.total_count);
//! }
//! ```
//!
//! # Modules
//!
//! - [`harvest`] - three-pass link discovery from parsed HTML
//! - [`classify`] - loose categorizer and strict download filter
//! - [`vocab`] - the fixed heuristic vocabularies
//! - [`fetch`] - reqwest-backed page source
//! - [`extractor`] - the never-raising extraction boundary
//! - [`traits`] - seams for the page source and site search collaborators
//! - [`testing`] - mock page source for tests

pub mod classify;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod harvest;
pub mod testing;
pub mod traits;
pub mod types;
pub mod vocab;

// Re-export core types at crate root
pub use error::{ExtractError, FetchError, ParseError};
pub use extractor::LinkExtractor;
pub use fetch::HttpFetcher;
pub use traits::{
    searcher::{MockSearcher, SearchHit, SiteSearcher},
    source::{FetchedPage, PageSource, ProbeResponse},
};
pub use types::{
    Category, CategoryMap, ClientConfig, ExtractionResult, LinkPreview, LinkRecord, LinkSource,
    PreviewResult,
};

// Re-export the classification entry points
pub use classify::{categorize, filter_downloads};
pub use harvest::harvest;

// Re-export testing utilities
pub use testing::MockFetcher;
