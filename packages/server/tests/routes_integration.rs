//! Route-level tests over mock collaborators.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use linksift::{MockFetcher, MockSearcher, PageSource, SearchHit};
use server_core::{build_app, AppState};

const PAGE: &str = r#"
    <html><body>
        <a href="/files/movie.mkv">Download Now</a>
        <a href="https://hubcloud.pk/abc">Click Here</a>
        <a href="/about">About us</a>
    </body></html>
"#;

fn test_app(mock: MockFetcher, searcher: MockSearcher) -> axum::Router {
    let state = AppState::new(Box::new(mock) as Box<dyn PageSource>, Arc::new(searcher));
    build_app(state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_serves_the_form() {
    let app = test_app(MockFetcher::new(), MockSearcher::new());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("action=\"/extract\""));
    assert!(html.contains("action=\"/search\""));
}

#[tokio::test]
async fn extract_form_renders_download_links() {
    let mock = MockFetcher::new().with_html("https://example.com/page", PAGE);
    let app = test_app(mock, MockSearcher::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/extract")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("url=example.com%2Fpage"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("https://example.com/files/movie.mkv"));
    assert!(html.contains("https://hubcloud.pk/abc"));
    assert!(!html.contains("/about\""));
}

#[tokio::test]
async fn extract_form_blank_url_shows_banner() {
    let app = test_app(MockFetcher::new(), MockSearcher::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/extract")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("url="))
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Please enter a valid URL"));
}

#[tokio::test]
async fn extract_form_fetch_failure_shows_banner() {
    // No page configured: the mock fails like an unreachable host.
    let app = test_app(MockFetcher::new(), MockSearcher::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/extract")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("url=nowhere.example"))
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("flash-error"));
    assert!(html.contains("failed to fetch webpage"));
}

#[tokio::test]
async fn api_extract_returns_result_json() {
    let mock = MockFetcher::new().with_html("https://example.com/page", PAGE);
    let app = test_app(mock, MockSearcher::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/extract")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"url": "https://example.com/page"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(json["error"].is_null());
    assert_eq!(json["total_count"], 2);
    assert!(json["categories"]["Download Links"].is_array());
}

#[tokio::test]
async fn api_extract_missing_url_is_400() {
    let app = test_app(MockFetcher::new(), MockSearcher::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/extract")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["error"], "Please provide a valid URL");
}

#[tokio::test]
async fn api_extract_unreachable_url_is_200_with_error_field() {
    let app = test_app(MockFetcher::new(), MockSearcher::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/extract")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"url": "https://nowhere.example"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(json["error"].is_string());
    assert_eq!(json["total_count"], 0);
}

#[tokio::test]
async fn search_renders_hits() {
    let searcher = MockSearcher::new()
        .with_hits(vec![SearchHit::new("https://site.example/m1", "Movie One")]);
    let app = test_app(MockFetcher::new(), searcher);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("keyword=movie"))
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Movie One"));
}

#[tokio::test]
async fn search_no_hits_shows_banner() {
    let app = test_app(MockFetcher::new(), MockSearcher::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("keyword=missing"))
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("No movies found"));
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app(MockFetcher::new(), MockSearcher::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
