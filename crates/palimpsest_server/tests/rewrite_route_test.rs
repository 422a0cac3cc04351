//! Route tests with a scripted driver.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use palimpsest_core::GenerateRequest;
use palimpsest_error::{GeminiError, GeminiErrorKind, PalimpsestResult};
use palimpsest_interface::TextDriver;
use palimpsest_server::{AppState, create_router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Driver that answers from the prompt's instruction marker and records
/// every prompt it sees.
#[derive(Clone, Default)]
struct ScriptedDriver {
    prompts: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

#[async_trait]
impl TextDriver for ScriptedDriver {
    async fn generate(&self, request: &GenerateRequest) -> PalimpsestResult<String> {
        self.prompts
            .lock()
            .expect("prompt log")
            .push(request.prompt().clone());
        if self.fail {
            return Err(GeminiError::new(GeminiErrorKind::NoText).into());
        }
        let reply = if request.prompt().contains("Summary:") {
            "the summary"
        } else if request.prompt().contains("Expanded version:") {
            "the expansion"
        } else {
            "the rewrite"
        };
        Ok(reply.to_string())
    }
}

fn app(driver: ScriptedDriver) -> Router {
    create_router(AppState::new(Arc::new(driver)))
}

async fn post_rewrite(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/rewrite")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn empty_text_is_rejected_before_generation() {
    let driver = ScriptedDriver::default();
    let prompts = driver.prompts.clone();

    let (status, body) = post_rewrite(app(driver), json!({ "text": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided.");
    assert!(prompts.lock().expect("prompt log").is_empty());
}

#[tokio::test]
async fn rewrites_with_route_defaults() {
    let driver = ScriptedDriver::default();
    let prompts = driver.prompts.clone();

    let (status, body) = post_rewrite(app(driver), json!({ "text": "hello world" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rewritten"], "the rewrite");
    assert!(body.get("summary").is_none());
    assert!(body.get("expansion").is_none());
    assert!(body.get("plagiarism").is_none());

    let prompts = prompts.lock().expect("prompt log");
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("hello world"));
    assert!(prompts[0].contains("**Polished** tone"));
    assert!(prompts[0].contains("natural tone in English"));
}

#[tokio::test]
async fn options_derive_from_the_rewritten_text() {
    let driver = ScriptedDriver::default();
    let prompts = driver.prompts.clone();

    let (status, body) = post_rewrite(
        app(driver),
        json!({
            "text": "hello world",
            "mode": "Casual",
            "language": "Spanish",
            "summarize_option": true,
            "expand_option": true,
            "plagiarism_check": true,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rewritten"], "the rewrite");
    assert_eq!(body["summary"], "the summary");
    assert_eq!(body["expansion"], "the expansion");
    let plagiarism = body["plagiarism"].as_f64().expect("plagiarism figure");
    assert!((0.0..=15.0).contains(&plagiarism));

    // Summary and expansion both chain off the rewritten text, not the input.
    let prompts = prompts.lock().expect("prompt log");
    assert_eq!(prompts.len(), 3);
    assert!(prompts[1].contains("Summary:"));
    assert!(prompts[1].contains("the rewrite"));
    assert!(prompts[2].contains("Expanded version:"));
    assert!(prompts[2].contains("the rewrite"));
}

#[tokio::test]
async fn generation_failure_maps_to_500_with_error_payload() {
    let driver = ScriptedDriver {
        fail: true,
        ..ScriptedDriver::default()
    };

    let (status, body) = post_rewrite(app(driver), json!({ "text": "hello world" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("Error processing text:"));
}

#[tokio::test]
async fn every_response_carries_the_security_headers() {
    let response = app(ScriptedDriver::default())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
    assert_eq!(
        headers["strict-transport-security"],
        "max-age=31536000; includeSubDomains"
    );
    assert!(headers.contains_key("content-security-policy"));

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(value["status"], "healthy");
}
