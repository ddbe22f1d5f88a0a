//! Trait seams for external collaborators.

pub mod searcher;
pub mod source;

pub use searcher::{MockSearcher, SearchHit, SiteSearcher};
pub use source::{FetchedPage, PageSource, ProbeResponse};
