//! JSON API variant of the extraction endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use linksift::ExtractionResult;

use crate::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ApiExtractRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// `POST /api/extract` - raw `ExtractionResult` as JSON.
///
/// 400 when no usable `url` is supplied. Extraction failures are not HTTP
/// errors: the library folds them into the result's `error` field and the
/// endpoint returns them with 200, the same shape callers get on success.
pub async fn api_extract_handler(
    State(state): State<AppState>,
    body: Option<Json<ApiExtractRequest>>,
) -> Result<Json<ExtractionResult>, (StatusCode, Json<serde_json::Value>)> {
    let url = body
        .and_then(|Json(req)| req.url)
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Please provide a valid URL"})),
            )
        })?;

    info!(url = %url, "API extract request");
    let result = state.extractor.extract_links(&url).await;
    Ok(Json(result))
}
