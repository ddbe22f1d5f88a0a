//! Minimal HTML rendering for the form and results pages.
//!
//! Hand-built pages, no template engine: the presentation layer is thin
//! glue over the library's result types. All interpolated values pass
//! through [`escape`].

use linksift::{ExtractionResult, SearchHit};

/// Escape a value for safe interpolation into HTML text or attributes.
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn flash(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            "<div class=\"flash flash-error\" role=\"alert\">{}</div>\n",
            escape(message)
        ),
        None => String::new(),
    }
}

/// The landing page: extract form + movie search form, with an optional
/// flash-style error banner.
pub fn index_page(error: Option<&str>) -> String {
    let body = format!(
        "{flash}\
         <h1>Download Link Extractor</h1>\n\
         <form method=\"post\" action=\"/extract\">\n\
           <label for=\"url\">Page URL</label>\n\
           <input type=\"text\" id=\"url\" name=\"url\" placeholder=\"example.com/page\">\n\
           <button type=\"submit\">Extract Links</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/search\">\n\
           <label for=\"keyword\">Movie search</label>\n\
           <input type=\"text\" id=\"keyword\" name=\"keyword\" placeholder=\"movie title\">\n\
           <button type=\"submit\">Search</button>\n\
         </form>",
        flash = flash(error)
    );
    page("Download Link Extractor", &body)
}

/// Categorized results for one extracted page.
pub fn results_page(url: &str, result: &ExtractionResult) -> String {
    let mut body = format!(
        "<h1>Results for {}</h1>\n<p>{} download link(s) found</p>\n",
        escape(url),
        result.total_count
    );

    if result.links.is_empty() {
        body.push_str("<p>No download links found on this page.</p>\n");
    }

    for (category, links) in &result.categories {
        body.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape(category.label())));
        for link in links {
            body.push_str(&format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>\n",
                escape(&link.url),
                escape(&link.text)
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p><a href=\"/\">Extract another page</a></p>");
    page("Extraction Results", &body)
}

/// Search hits for a movie-title keyword.
pub fn search_results_page(keyword: &str, hits: &[SearchHit]) -> String {
    let mut body = format!(
        "<h1>Search results for &quot;{}&quot;</h1>\n<p>{} result(s)</p>\n<ul>\n",
        escape(keyword),
        hits.len()
    );

    for hit in hits {
        let poster = hit
            .poster
            .as_deref()
            .map(|p| format!("<img src=\"{}\" alt=\"\" width=\"60\"> ", escape(p)))
            .unwrap_or_default();
        body.push_str(&format!(
            "<li>{}<a href=\"{}\">{}</a></li>\n",
            poster,
            escape(&hit.url),
            escape(&hit.title)
        ));
    }

    body.push_str("</ul>\n<p><a href=\"/\">Back</a></p>");
    page("Search Results", &body)
}
