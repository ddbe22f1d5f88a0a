use axum::response::Html;

use crate::render;

/// Main page with the URL input form.
pub async fn index_handler() -> Html<String> {
    Html(render::index_page(None))
}
