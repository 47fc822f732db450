use super::*;
use axum::{
    body::{self, Body},
    http::Request,
};
use tower::ServiceExt;

fn test_app(max_body_bytes: usize) -> Router {
    let humanizer = Humanizer::with_seed(5).expect("humanizer");
    build_router(Arc::new(AppState {
        api: ApiContext::new(humanizer),
        max_body_bytes,
    }))
}

async fn read_envelope(response: axum::response::Response) -> HumanizeResponse {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

fn humanize_request(body: impl Into<Body>) -> Request<Body> {
    Request::post(HUMANIZE_ROUTE)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("request")
}

#[tokio::test]
async fn health_reports_healthy() {
    let request = Request::get(HEALTH_ROUTE)
        .body(Body::empty())
        .expect("request");
    let response = test_app(1024).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let health: HealthResponse = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn humanize_route_returns_success_envelope() {
    let request = humanize_request(
        serde_json::json!({ "text": "their is a apple here" }).to_string(),
    );
    let response = test_app(1024).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let envelope = read_envelope(response).await;
    assert!(envelope.success);
    assert_eq!(envelope.original.as_deref(), Some("their is a apple here"));
    assert_eq!(envelope.humanized.as_deref(), Some("There is an apple here"));
}

#[tokio::test]
async fn empty_text_is_rejected_with_error_envelope() {
    let request = humanize_request(serde_json::json!({ "text": "" }).to_string());
    let response = test_app(1024).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_envelope(response).await;
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some(api::NO_TEXT_PROVIDED));
}

#[tokio::test]
async fn missing_text_field_is_treated_as_empty() {
    let request = humanize_request("{}");
    let response = test_app(1024).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_envelope(response).await.error.as_deref(),
        Some(api::NO_TEXT_PROVIDED)
    );
}

#[tokio::test]
async fn malformed_json_gets_failure_envelope() {
    let request = humanize_request("{\"text\": ");
    let response = test_app(1024).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_envelope(response).await;
    assert!(!envelope.success);
    assert!(envelope.error.is_some());
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let text = "word ".repeat(200);
    let body = serde_json::json!({ "text": text }).to_string();
    let request = Request::post(HUMANIZE_ROUTE)
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body))
        .expect("request");
    let response = test_app(64).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn oversized_body_without_length_gets_failure_envelope() {
    let text = "word ".repeat(200);
    let request = humanize_request(serde_json::json!({ "text": text }).to_string());
    let response = test_app(64).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let envelope = read_envelope(response).await;
    assert!(!envelope.success);
    assert!(envelope.error.is_some());
}

#[tokio::test]
async fn missing_content_type_is_a_validation_failure() {
    let request = Request::post(HUMANIZE_ROUTE)
        .body(Body::from(r#"{"text":"hello"}"#))
        .expect("request");
    let response = test_app(1024).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!read_envelope(response).await.success);
}
