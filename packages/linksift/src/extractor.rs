//! The extraction boundary: fetch, harvest, filter, package.
//!
//! `LinkExtractor` never returns `Err`. Fetch and parse failures are
//! folded into the `error` field of the result so the caller always gets
//! a well-formed result object, never a raised error.

use scraper::{Html, Selector};
use tracing::{error, info};
use url::Url;

use crate::classify::filter_downloads;
use crate::error::{ExtractError, FetchError};
use crate::fetch::HttpFetcher;
use crate::harvest::harvest;
use crate::traits::source::PageSource;
use crate::types::{Category, CategoryMap, ExtractionResult, LinkPreview, LinkRecord, PreviewResult};

/// One-shot, stateless link extractor over a pluggable page source.
pub struct LinkExtractor<S: PageSource> {
    source: S,
}

impl<S: PageSource> LinkExtractor<S> {
    /// Create an extractor over the given page source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch `url` and return its strict-filtered download links.
    ///
    /// The input scheme defaults to `https://` when missing. Zero
    /// qualifying links is a success with empty fields, distinct from a
    /// fetch/parse failure.
    pub async fn extract_links(&self, url: &str) -> ExtractionResult {
        let url = url.trim();
        if url.is_empty() {
            return failure_from(FetchError::InvalidUrl {
                url: url.to_string(),
            }
            .into());
        }

        let normalized = HttpFetcher::normalize_url(url);
        let base_url = match Url::parse(&normalized) {
            Ok(parsed) => parsed,
            Err(_) => {
                return failure_from(FetchError::InvalidUrl { url: normalized }.into());
            }
        };

        let page = match self.source.fetch(normalized.as_str()).await {
            Ok(page) => page,
            Err(e) => {
                error!(url = %normalized, error = %e, "Fetch failed");
                return failure_from(e.into());
            }
        };

        // Resolve against the final URL when redirects moved the page.
        let base_url = Url::parse(&page.url).unwrap_or(base_url);

        let downloads = harvest_downloads(&page.html, &base_url);
        info!(
            url = %normalized,
            downloads = downloads.len(),
            "Extraction complete"
        );

        let mut categories = CategoryMap::new();
        if !downloads.is_empty() {
            categories.insert(Category::DownloadLinks, downloads.clone());
        }
        ExtractionResult::ok(downloads, categories)
    }

    /// Lightweight existence/metadata check for a single URL.
    ///
    /// HEAD probe first; for HTML targets a bounded GET recovers the
    /// `<title>` and meta description.
    pub async fn get_link_preview(&self, url: &str) -> PreviewResult {
        let url = url.trim();
        if url.is_empty() {
            return PreviewResult::failure("empty URL");
        }
        let normalized = HttpFetcher::normalize_url(url);

        let probe = match self.source.probe(&normalized).await {
            Ok(probe) => probe,
            Err(e) => {
                error!(url = %normalized, error = %e, "Preview probe failed");
                return PreviewResult::failure(e.to_string());
            }
        };

        let mut preview = LinkPreview {
            content_type: probe.content_type.clone().unwrap_or_default(),
            content_length: probe.content_length,
            status_code: probe.status,
            title: None,
            description: None,
        };

        if probe.is_html() {
            match self.source.fetch_preview(&normalized).await {
                Ok(page) => {
                    let (title, description) = html_metadata(&page.html);
                    preview.title = title;
                    preview.description = description;
                }
                Err(e) => {
                    error!(url = %normalized, error = %e, "Preview fetch failed");
                    return PreviewResult::failure(e.to_string());
                }
            }
        }

        PreviewResult::ok(preview)
    }
}

/// Fold a boundary error into a failed result.
fn failure_from(err: ExtractError) -> ExtractionResult {
    ExtractionResult::failure(err.to_string())
}

/// Parse, harvest, and strict-filter in one synchronous step.
///
/// Kept out of the async path so the non-`Send` parsed document never
/// lives across an await point.
fn harvest_downloads(html: &str, base_url: &Url) -> Vec<LinkRecord> {
    let document = Html::parse_document(html);
    let candidates = harvest(&document, base_url);
    filter_downloads(&candidates)
}

/// `<title>` text and meta description from raw HTML.
fn html_metadata(html: &str) -> (Option<String>, Option<String>) {
    let document = Html::parse_document(html);

    let title = Selector::parse("title").ok().and_then(|sel| {
        document
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    });

    let description = Selector::parse(r#"meta[name="description"]"#)
        .ok()
        .and_then(|sel| {
            document
                .select(&sel)
                .next()
                .and_then(|el| el.value().attr("content"))
                .map(|s| s.to_string())
                .filter(|s| !s.is_empty())
        });

    (title, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockFetcher;

    const AGGREGATOR_PAGE: &str = r#"
        <html><head><title>Movie Page</title></head><body>
            <a href="/files/movie.mkv">Download Now</a>
            <a href="https://hubcloud.pk/abc123">Click Here</a>
            <a href="https://facebook.com/page">Join our channel</a>
            <a href="/about">About us</a>
        </body></html>
    "#;

    #[tokio::test]
    async fn test_extract_links_filters_to_downloads() {
        let mock = MockFetcher::new().with_html("https://example.com/page", AGGREGATOR_PAGE);
        let extractor = LinkExtractor::new(mock);

        let result = extractor.extract_links("https://example.com/page").await;

        assert!(result.error.is_none());
        assert_eq!(result.total_count, 2);
        let urls: Vec<&str> = result.links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://example.com/files/movie.mkv", "https://hubcloud.pk/abc123"]
        );
        assert!(result.categories.contains_key(&Category::DownloadLinks));
        assert_eq!(result.categories.len(), 1);
    }

    #[tokio::test]
    async fn test_extract_links_normalizes_scheme() {
        let mock = MockFetcher::new().with_html("https://example.com/page", AGGREGATOR_PAGE);
        let extractor = LinkExtractor::new(mock);

        let result = extractor.extract_links("example.com/page").await;
        assert!(result.error.is_none());
        assert_eq!(result.total_count, 2);
    }

    #[tokio::test]
    async fn test_extract_links_unreachable_is_error_result() {
        let mock = MockFetcher::new(); // no pages configured -> fetch fails
        let extractor = LinkExtractor::new(mock);

        let result = extractor.extract_links("https://nowhere.example").await;
        assert!(result.error.is_some());
        assert!(result.links.is_empty());
        assert!(result.categories.is_empty());
        assert_eq!(result.total_count, 0);
    }

    #[tokio::test]
    async fn test_extract_links_empty_body_is_empty_success() {
        // An empty body parses to an empty document: zero links found,
        // not a failure.
        let mock = MockFetcher::new().with_html("https://example.com/", "");
        let extractor = LinkExtractor::new(mock);

        let result = extractor.extract_links("https://example.com/").await;
        assert!(result.error.is_none());
        assert!(result.is_empty_success());
        assert_eq!(result.total_count, 0);
    }

    #[tokio::test]
    async fn test_extract_links_empty_url_is_error_result() {
        let extractor = LinkExtractor::new(MockFetcher::new());
        let result = extractor.extract_links("   ").await;
        assert!(result.error.is_some());
        assert_eq!(result.total_count, 0);
    }

    #[tokio::test]
    async fn test_extract_links_no_downloads_is_empty_success() {
        let mock = MockFetcher::new().with_html(
            "https://example.com/",
            r#"<a href="/about">About us</a><a href="/blog">Blog</a>"#,
        );
        let extractor = LinkExtractor::new(mock);

        let result = extractor.extract_links("https://example.com/").await;
        assert!(result.is_empty_success());
        assert!(result.categories.is_empty());
    }

    #[tokio::test]
    async fn test_preview_html_recovers_title_and_description() {
        let html = r#"<html><head><title>A Page</title>
            <meta name="description" content="A description.">
            </head><body></body></html>"#;
        let mock = MockFetcher::new().with_html("https://example.com/", html);
        let extractor = LinkExtractor::new(mock);

        let result = extractor.get_link_preview("https://example.com/").await;
        let preview = result.preview.expect("preview");
        assert_eq!(preview.title.as_deref(), Some("A Page"));
        assert_eq!(preview.description.as_deref(), Some("A description."));
        assert_eq!(preview.status_code, 200);
    }

    #[tokio::test]
    async fn test_preview_non_html_skips_body_fetch() {
        let mock = MockFetcher::new().with_probe(
            "https://example.com/file.zip",
            crate::traits::ProbeResponse::new("application/zip").with_content_length(1024),
        );
        let extractor = LinkExtractor::new(mock);

        let result = extractor.get_link_preview("https://example.com/file.zip").await;
        let preview = result.preview.expect("preview");
        assert_eq!(preview.content_type, "application/zip");
        assert_eq!(preview.content_length, Some(1024));
        assert!(preview.title.is_none());
    }

    #[tokio::test]
    async fn test_preview_unreachable_is_error_result() {
        let extractor = LinkExtractor::new(MockFetcher::new());
        let result = extractor.get_link_preview("https://nowhere.example").await;
        assert!(result.error.is_some());
        assert!(result.preview.is_none());
    }
}
