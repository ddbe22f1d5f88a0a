//! Movie-title keyword search, delegated to the configured site searcher.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::{info, warn};

use crate::app::AppState;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub keyword: String,
}

/// `POST /search` - search the target site for a movie title.
pub async fn search_handler(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let keyword = form.keyword.trim();
    if keyword.is_empty() {
        return Html(render::index_page(Some(
            "Please enter a movie name to search",
        )));
    }

    info!(keyword = %keyword, "Search request");
    match state.searcher.search(keyword).await {
        Ok(hits) if hits.is_empty() => Html(render::index_page(Some(&format!(
            "No movies found for \"{keyword}\""
        )))),
        Ok(hits) => Html(render::search_results_page(keyword, &hits)),
        Err(e) => {
            warn!(keyword = %keyword, error = %e, "Search failed");
            Html(render::index_page(Some(&format!("Search failed: {e}"))))
        }
    }
}
