//! Link classification - the loose categorizer and the strict download
//! filter.
//!
//! Both contracts share the heuristic vocabulary in [`crate::vocab`] and
//! work over a lower-cased projection of each link's fields. `categorize`
//! is multi-label and permissive; `filter_downloads` is the primary path
//! and trades recall for precision: it conjoins a positive signal with two
//! negative-exclusion lists and a final corroboration clause.

use tracing::debug;
use url::Url;

use crate::types::{Category, CategoryMap, LinkRecord};
use crate::vocab::{
    contains_any, path_has_extension, CORROBORATION_MARKERS, DOWNLOAD_EXTENSIONS,
    DOWNLOAD_KEYWORDS, HOSTING_DOMAINS, IMAGE_EXTENSIONS, MEDIA_DOMAINS, NAV_PATHS, NAV_TERMS,
    SKIP_SITES, SKIP_TERMS, SOCIAL_DOMAINS, URL_PATH_MARKERS,
};

/// Lower-cased projection of a link's classifiable fields, built once per
/// link and shared by every predicate.
struct LinkView {
    url: String,
    text: String,
    domain: String,
    path: String,
}

impl LinkView {
    fn new(link: &LinkRecord) -> Self {
        let (domain, path) = match Url::parse(&link.url) {
            Ok(parsed) => (
                parsed.host_str().unwrap_or("").to_lowercase(),
                parsed.path().to_lowercase(),
            ),
            // Opaque schemes like mailto: have no host; fall back to the
            // whole URL as the path so extension checks still see it.
            Err(_) => (String::new(), link.url.to_lowercase()),
        };

        Self {
            url: link.url.to_lowercase(),
            text: link.text.to_lowercase(),
            domain,
            path,
        }
    }

    fn has_scheme(&self, scheme: &str) -> bool {
        self.url.starts_with(scheme)
    }
}

/// Ordered list of (category, predicate) pairs. The catch-all is handled
/// separately after these, so a link lands in External Links only when it
/// matched none of the named predicates.
fn category_predicates() -> [(Category, fn(&LinkView) -> bool); 7] {
    [
        (Category::DownloadLinks, is_download_like),
        (Category::SocialMedia, is_social),
        (Category::EmailLinks, is_email),
        (Category::PhoneLinks, is_phone),
        (Category::ImageLinks, is_image),
        (Category::MediaLinks, is_media),
        (Category::Navigation, is_navigation),
    ]
}

fn is_download_like(view: &LinkView) -> bool {
    path_has_extension(&view.path, DOWNLOAD_EXTENSIONS)
        || view.text.contains("download")
        || view.url.contains("download")
        || view.domain.contains("hubcloud")
        || view.domain.contains("gdflix")
        || view.domain.contains("gdtot")
}

fn is_social(view: &LinkView) -> bool {
    contains_any(&view.domain, SOCIAL_DOMAINS)
}

fn is_email(view: &LinkView) -> bool {
    view.has_scheme("mailto:")
}

fn is_phone(view: &LinkView) -> bool {
    view.has_scheme("tel:")
}

fn is_image(view: &LinkView) -> bool {
    path_has_extension(&view.path, IMAGE_EXTENSIONS)
}

fn is_media(view: &LinkView) -> bool {
    contains_any(&view.domain, MEDIA_DOMAINS)
}

fn is_navigation(view: &LinkView) -> bool {
    contains_any(&view.text, NAV_TERMS)
        || NAV_PATHS.iter().any(|nav| view.path.contains(nav))
}

/// Categorize links into the fixed multi-label vocabulary.
///
/// Predicates are independent and non-exclusive; a link may land in
/// several buckets. The External Links catch-all receives only links no
/// named predicate claimed. Empty buckets are never inserted, and the map
/// iterates sorted by category label.
pub fn categorize(links: &[LinkRecord]) -> CategoryMap {
    let mut categories = CategoryMap::new();

    for link in links {
        let view = LinkView::new(link);
        let mut matched = false;

        for (category, predicate) in category_predicates() {
            if predicate(&view) {
                categories.entry(category).or_default().push(link.clone());
                matched = true;
            }
        }

        if !matched {
            categories
                .entry(Category::ExternalLinks)
                .or_default()
                .push(link.clone());
        }
    }

    categories
}

/// Strict download filter: retains only links that look like genuine
/// file-hosting download targets, in original order.
///
/// Pure function of its input; running it twice yields the same sequence.
pub fn filter_downloads(links: &[LinkRecord]) -> Vec<LinkRecord> {
    let retained: Vec<LinkRecord> = links
        .iter()
        .filter(|link| is_download(&LinkView::new(link)))
        .cloned()
        .collect();

    debug!(
        candidates = links.len(),
        retained = retained.len(),
        "Strict download filter applied"
    );
    retained
}

/// The four-conjunct download test.
///
/// The final corroboration clause overlaps part of the positive clause;
/// that redundancy is deliberate, kept behavior.
fn is_download(view: &LinkView) -> bool {
    let positive_signal = path_has_extension(&view.path, DOWNLOAD_EXTENSIONS)
        || contains_any(&view.domain, HOSTING_DOMAINS)
        || contains_any(&view.text, DOWNLOAD_KEYWORDS)
        || contains_any(&view.url, DOWNLOAD_KEYWORDS)
        || contains_any(&view.url, URL_PATH_MARKERS);

    let no_skip_term = !contains_any(&view.text, SKIP_TERMS);
    let no_skip_site = !contains_any(&view.url, SKIP_SITES);

    let corroborated = contains_any(&view.domain, HOSTING_DOMAINS)
        || contains_any(&view.url, CORROBORATION_MARKERS)
        || path_has_extension(&view.path, DOWNLOAD_EXTENSIONS);

    positive_signal && no_skip_term && no_skip_site && corroborated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str, text: &str) -> LinkRecord {
        LinkRecord::new(url, url, text)
    }

    #[test]
    fn test_extension_match_retained() {
        let links = vec![link("https://example.com/files/movie.mkv", "Download Now")];
        let downloads = filter_downloads(&links);
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].url, "https://example.com/files/movie.mkv");
    }

    #[test]
    fn test_social_link_with_skip_terms_excluded() {
        let links = vec![link("https://facebook.com/page", "Join our channel")];
        assert!(filter_downloads(&links).is_empty());
    }

    #[test]
    fn test_hosting_domain_retained_without_keywords() {
        let links = vec![link("https://hubcloud.pk/abc123", "Click Here")];
        let downloads = filter_downloads(&links);
        assert_eq!(downloads.len(), 1);
    }

    #[test]
    fn test_skip_term_alone_excludes() {
        // Positive signal (extension) but the label carries a skip term.
        let links = vec![link("https://example.com/thanks.zip", "Thank you for sharing")];
        assert!(filter_downloads(&links).is_empty());
    }

    #[test]
    fn test_skip_site_alone_excludes() {
        let links = vec![link("https://t.me/somechannel/file.zip", "Get file")];
        assert!(filter_downloads(&links).is_empty());
    }

    #[test]
    fn test_corroboration_required() {
        // "download" in the text is a positive signal, but the URL has no
        // hosting domain, marker path, or extension to corroborate it.
        let links = vec![link("https://example.com/article", "download guide review")];
        assert!(filter_downloads(&links).is_empty());
    }

    #[test]
    fn test_path_marker_retained() {
        let links = vec![link("https://example.com/dl/abc", "Mirror 2")];
        let downloads = filter_downloads(&links);
        assert_eq!(downloads.len(), 1);
    }

    #[test]
    fn test_filter_preserves_order_and_is_idempotent() {
        let links = vec![
            link("https://hubcloud.pk/a", "Mirror A"),
            link("https://example.com/about", "About us"),
            link("https://example.com/files/b.rar", "B archive"),
        ];
        let once = filter_downloads(&links);
        let twice = filter_downloads(&once);

        let urls: Vec<&str> = once.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["https://hubcloud.pk/a", "https://example.com/files/b.rar"]);
        let urls_twice: Vec<&str> = twice.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, urls_twice);
    }

    #[test]
    fn test_categorize_mailto_goes_to_email_only() {
        let links = vec![link("mailto:team@example.com", "Write us")];
        let categories = categorize(&links);
        assert!(categories.contains_key(&Category::EmailLinks));
        assert!(!categories.contains_key(&Category::ExternalLinks));
        assert_eq!(categories.len(), 1);
    }

    #[test]
    fn test_categorize_tel_goes_to_phone() {
        let links = vec![link("tel:+15551234567", "Call")];
        let categories = categorize(&links);
        assert!(categories.contains_key(&Category::PhoneLinks));
        assert_eq!(categories.len(), 1);
    }

    #[test]
    fn test_categorize_is_multi_label() {
        // YouTube is both a social and a media domain.
        let links = vec![link("https://youtube.com/watch?v=x", "Trailer")];
        let categories = categorize(&links);
        assert!(categories.contains_key(&Category::SocialMedia));
        assert!(categories.contains_key(&Category::MediaLinks));
        assert!(!categories.contains_key(&Category::ExternalLinks));
    }

    #[test]
    fn test_categorize_catch_all_for_unmatched() {
        let links = vec![link("https://example.org/misc", "Misc page")];
        let categories = categorize(&links);
        assert_eq!(categories.len(), 1);
        assert!(categories.contains_key(&Category::ExternalLinks));
    }

    #[test]
    fn test_categorize_drops_empty_buckets_and_sorts() {
        let links = vec![
            link("https://example.org/misc", "Misc"),
            link("https://example.com/pic.png", "Pic"),
            link("https://hubcloud.pk/x", "download"),
        ];
        let categories = categorize(&links);

        let labels: Vec<&str> = categories.keys().map(|c| c.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
        assert!(categories.values().all(|bucket| !bucket.is_empty()));
    }

    #[test]
    fn test_categorize_navigation_by_text_and_path() {
        let by_text = vec![link("https://example.com/x", "About the team")];
        assert!(categorize(&by_text).contains_key(&Category::Navigation));

        let by_path = vec![link("https://example.com/blog/post-1", "Read more")];
        assert!(categorize(&by_path).contains_key(&Category::Navigation));
    }
}
