use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use postforge_core::error::AppError;
use postforge_core::testutil::MockFetcher;

use crate::common::{ARTICLE_HTML, setup_test_app};

fn repurpose_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/repurpose")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app(MockFetcher::new(ARTICLE_HTML));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn index_serves_landing_page() {
    let app = setup_test_app(MockFetcher::new(ARTICLE_HTML));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<title>Postforge</title>"));
    assert!(html.contains("repurpose-form"));
}

#[tokio::test]
async fn missing_url_returns_400() {
    let app = setup_test_app(MockFetcher::new(ARTICLE_HTML));

    let response = app.oneshot(repurpose_request(serde_json::json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"error": "URL is required"}));
}

#[tokio::test]
async fn empty_url_returns_400() {
    let app = setup_test_app(MockFetcher::new(ARTICLE_HTML));

    let response = app
        .oneshot(repurpose_request(serde_json::json!({"url": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "URL is required");
}

#[tokio::test]
async fn repurpose_returns_all_three_variants() {
    let app = setup_test_app(MockFetcher::new(ARTICLE_HTML));

    let response = app
        .oneshot(repurpose_request(
            serde_json::json!({"url": "https://example.com/article"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let linkedin = json["linkedin"].as_str().unwrap();
    assert!(linkedin.contains("**A Thought-Provoking Insight**"));
    assert!(linkedin.contains('#'));

    let twitter = json["twitter"].as_array().unwrap();
    assert_eq!(twitter.len(), 3);
    assert!(twitter[0].as_str().unwrap().starts_with("🔥 "));
    assert!(
        twitter[2]
            .as_str()
            .unwrap()
            .ends_with("Read the full analysis here: https://example.com/article")
    );

    let caption = json["instagram"]["caption"].as_str().unwrap();
    assert!(caption.contains("..."));
    assert!(!json["instagram"]["reel_idea"].as_str().unwrap().is_empty());

    // Boilerplate never leaks into any variant.
    assert!(!linkedin.contains("All rights reserved"));
    assert!(!linkedin.contains("Home | About | Contact"));
}

#[tokio::test]
async fn fetch_failure_returns_500_with_detail() {
    let app = setup_test_app(MockFetcher::with_error(AppError::NetworkError(
        "Connection failed: dns error".to_string(),
    )));

    let response = app
        .oneshot(repurpose_request(
            serde_json::json!({"url": "https://unreachable.example"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Failed to fetch URL: "));
    assert!(message.contains("dns error"));
}

#[tokio::test]
async fn page_without_text_returns_400() {
    let app = setup_test_app(MockFetcher::new(
        "<html><body><script>render();</script></body></html>",
    ));

    let response = app
        .oneshot(repurpose_request(
            serde_json::json!({"url": "https://example.com/spa"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"error": "Could not extract text from the URL."})
    );
}
