//! Form-driven extraction: accepts a URL, renders categorized results.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::info;

use crate::app::AppState;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct ExtractForm {
    #[serde(default)]
    pub url: String,
}

/// `POST /extract` - extract links from the submitted URL.
///
/// Failures come back as the form page with a flash-style banner; a
/// successful extraction with zero links renders the results page with a
/// "no links found" notice rather than an error.
pub async fn extract_handler(
    State(state): State<AppState>,
    Form(form): Form<ExtractForm>,
) -> Html<String> {
    let url = form.url.trim();
    if url.is_empty() {
        return Html(render::index_page(Some("Please enter a valid URL")));
    }

    info!(url = %url, "Extract request");
    let result = state.extractor.extract_links(url).await;

    if let Some(error) = &result.error {
        return Html(render::index_page(Some(error)));
    }

    Html(render::results_page(url, &result))
}
