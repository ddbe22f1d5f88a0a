//! Category vocabulary for the loose multi-label classifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::link::LinkRecord;

/// Fixed category vocabulary.
///
/// Variants are declared in label-alphabetical order so that a
/// `BTreeMap<Category, _>` iterates sorted by display label, which is the
/// order the category map is rendered and serialized in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "Download Links")]
    DownloadLinks,
    #[serde(rename = "Email Links")]
    EmailLinks,
    #[serde(rename = "External Links")]
    ExternalLinks,
    #[serde(rename = "Image Links")]
    ImageLinks,
    #[serde(rename = "Media Links")]
    MediaLinks,
    #[serde(rename = "Navigation")]
    Navigation,
    #[serde(rename = "Phone Links")]
    PhoneLinks,
    #[serde(rename = "Social Media")]
    SocialMedia,
}

impl Category {
    /// Human-readable label, also the JSON map key.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DownloadLinks => "Download Links",
            Category::EmailLinks => "Email Links",
            Category::ExternalLinks => "External Links",
            Category::ImageLinks => "Image Links",
            Category::MediaLinks => "Media Links",
            Category::Navigation => "Navigation",
            Category::PhoneLinks => "Phone Links",
            Category::SocialMedia => "Social Media",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapping from category to the links placed in it.
///
/// A link may appear in several buckets; buckets with zero entries are
/// never inserted. Built fresh per extraction call.
pub type CategoryMap = BTreeMap<Category, Vec<LinkRecord>>;
