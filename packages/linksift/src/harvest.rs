//! Link harvesting - discovers candidate link records from parsed HTML.
//!
//! Three passes run in fixed order and their results are concatenated:
//! plain anchors, inline `onclick` navigation scripts, and images wrapped
//! in anchors. The harvester over-collects on purpose; precision is the
//! classifier's job.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::types::{LinkRecord, LinkSource};
use crate::vocab::{contains_any, IMAGE_BUTTON_HINTS};

/// Placeholder label for records extracted from inline scripts.
const JAVASCRIPT_LINK_LABEL: &str = "JavaScript Link";

/// Placeholder label for records extracted from image buttons.
const IMAGE_LINK_LABEL: &str = "Image Link";

/// Harvest candidate link records from a parsed document.
///
/// Every returned record carries an absolute `url` resolved against
/// `base_url`. Document order is preserved within each pass, and the
/// image pass dedups by resolved URL against everything harvested before
/// it.
pub fn harvest(document: &Html, base_url: &Url) -> Vec<LinkRecord> {
    let mut links = Vec::new();

    harvest_anchors(document, base_url, &mut links);
    harvest_script_navigation(document, base_url, &mut links);
    harvest_image_links(document, base_url, &mut links);

    debug!(count = links.len(), base = %base_url, "Harvest complete");
    links
}

/// Pass 1: anchors with a non-empty, non-fragment `href`.
fn harvest_anchors(document: &Html, base_url: &Url, links: &mut Vec<LinkRecord>) {
    let selector = Selector::parse("a[href]").unwrap();

    for anchor in document.select(&selector) {
        let href = anchor.value().attr("href").unwrap_or("").trim();
        if href.is_empty() || href.starts_with('#') {
            continue;
        }

        let Ok(absolute) = base_url.join(href) else {
            debug!(href = %href, "Skipping unresolvable href");
            continue;
        };

        let title = anchor.value().attr("title").unwrap_or("").to_string();
        let text = element_text(&anchor);
        let text = if !text.is_empty() {
            text
        } else if !title.is_empty() {
            title.clone()
        } else {
            href.to_string()
        };

        links.push(
            LinkRecord::new(absolute, href, text)
                .with_title(title)
                .with_target(anchor.value().attr("target").unwrap_or("").to_string())
                .with_rel(token_list(&anchor, "rel"))
                .with_class(class_list(&anchor)),
        );
    }
}

/// Pass 2: `button`/`div`/`span` elements whose `onclick` navigates.
///
/// Matches `window.open('…')` plus `location.href = '…'` and
/// `window.location = '…'` with a single- or double-quoted literal. This
/// is a best-effort pattern match, not a JS parser; elements whose
/// `onclick` does not match are silently skipped.
fn harvest_script_navigation(document: &Html, base_url: &Url, links: &mut Vec<LinkRecord>) {
    let selector = Selector::parse("button[onclick], div[onclick], span[onclick]").unwrap();
    let pattern =
        Regex::new(r#"(?:window\.open\s*\(\s*|(?:window\.location|location\.href)\s*=\s*)["']([^"']+)["']"#)
            .unwrap();

    for element in document.select(&selector) {
        let onclick = element.value().attr("onclick").unwrap_or("");
        let Some(capture) = pattern.captures(onclick) else {
            continue;
        };
        let href = capture.get(1).map(|m| m.as_str()).unwrap_or("");

        let Ok(absolute) = base_url.join(href) else {
            debug!(href = %href, "Skipping unresolvable onclick target");
            continue;
        };

        let text = element_text(&element);
        let text = if text.is_empty() {
            JAVASCRIPT_LINK_LABEL.to_string()
        } else {
            text
        };

        links.push(
            LinkRecord::new(absolute, href, text)
                .with_title(element.value().attr("title").unwrap_or("").to_string())
                .with_target("_blank")
                .with_class(class_list(&element))
                .with_source(LinkSource::Javascript),
        );
    }
}

/// Pass 3: images inside anchors that resemble download buttons.
///
/// A candidate is kept only if its resolved URL is new relative to the
/// earlier passes and its alt text, src, or label carries a
/// download-affinity hint.
fn harvest_image_links(document: &Html, base_url: &Url, links: &mut Vec<LinkRecord>) {
    let selector = Selector::parse("img").unwrap();

    for image in document.select(&selector) {
        let Some(anchor) = enclosing_anchor(&image) else {
            continue;
        };
        let href = anchor.value().attr("href").unwrap_or("").trim();
        if href.is_empty() {
            continue;
        }

        let Ok(absolute) = base_url.join(href) else {
            continue;
        };
        if links.iter().any(|link| link.url == absolute.as_str()) {
            continue;
        }

        let alt = image.value().attr("alt").unwrap_or("").to_string();
        let src = image.value().attr("src").unwrap_or("");
        let anchor_text = element_text(&anchor);
        let text = if !alt.is_empty() {
            alt.clone()
        } else if !anchor_text.is_empty() {
            anchor_text.clone()
        } else {
            IMAGE_LINK_LABEL.to_string()
        };

        if !looks_like_download_button(&alt, src, &text) {
            continue;
        }

        links.push(
            LinkRecord::new(absolute, href, text)
                .with_title(anchor.value().attr("title").unwrap_or("").to_string())
                .with_target(anchor.value().attr("target").unwrap_or("").to_string())
                .with_rel(token_list(&anchor, "rel"))
                .with_class(class_list(&anchor))
                .with_source(LinkSource::ImageLink),
        );
    }
}

/// Download-affinity test for image buttons.
fn looks_like_download_button(alt: &str, src: &str, label: &str) -> bool {
    contains_any(&alt.to_lowercase(), IMAGE_BUTTON_HINTS)
        || contains_any(&src.to_lowercase(), IMAGE_BUTTON_HINTS)
        || contains_any(&label.to_lowercase(), IMAGE_BUTTON_HINTS)
}

/// Nearest enclosing `<a>` ancestor, if any.
fn enclosing_anchor<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
}

/// Trimmed, whitespace-collapsed text content of an element.
fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-separated token list from an attribute.
fn token_list(element: &ElementRef<'_>, attr: &str) -> Vec<String> {
    element
        .value()
        .attr(attr)
        .unwrap_or("")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Class tokens in document order.
fn class_list(element: &ElementRef<'_>) -> Vec<String> {
    element.value().classes().map(str::to_string).collect()
}
