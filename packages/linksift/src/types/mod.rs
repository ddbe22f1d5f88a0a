//! Data types shared across harvesting and classification.

pub mod category;
pub mod config;
pub mod link;
pub mod result;

pub use category::{Category, CategoryMap};
pub use config::ClientConfig;
pub use link::{LinkRecord, LinkSource};
pub use result::{ExtractionResult, LinkPreview, PreviewResult};
