//! HTTP API for the rewriting service.

use crate::config::{MAX_CONTENT_LENGTH, SECURE_HEADERS, ServerConfig};
use crate::plagiarism;
use crate::request::RewriteRequest;
use crate::response::RewriteResponse;
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use palimpsest_core::GenerateRequest;
use palimpsest_error::{PalimpsestResult, ServerError};
use palimpsest_interface::TextDriver;
use palimpsest_models::{GeminiClient, expand_prompt, rewrite_prompt, summarize_prompt};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

/// Shared state for route handlers.
pub struct AppState<D> {
    driver: Arc<D>,
}

impl<D> AppState<D> {
    /// Creates a new state wrapping the given driver.
    pub fn new(driver: Arc<D>) -> Self {
        Self { driver }
    }
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
        }
    }
}

/// Creates the API router.
pub fn create_router<D>(state: AppState<D>) -> Router
where
    D: TextDriver + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/rewrite", post(rewrite::<D>))
        .layer(DefaultBodyLimit::max(MAX_CONTENT_LENGTH))
        .layer(middleware::from_fn(secure_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the production driver from config and serves the API until the
/// process is stopped.
///
/// # Errors
///
/// Returns an error if the driver cannot be constructed or the listener
/// cannot bind.
pub async fn run(config: ServerConfig) -> PalimpsestResult<()> {
    let driver = GeminiClient::new(
        config.api_key().clone(),
        config.model().clone(),
        config.base_url().clone(),
    )?;
    let state = AppState::new(Arc::new(driver));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host(), config.port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::new(format!("failed to bind {}: {}", addr, e)))?;
    info!(addr = %addr, model = %config.model(), "Listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(format!("server error: {}", e)))?;

    Ok(())
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Rewrite endpoint.
///
/// Rewrites the text, then optionally summarizes and expands the
/// rewritten result. Rejects empty text before touching the driver.
#[instrument(skip_all)]
async fn rewrite<D>(
    State(state): State<AppState<D>>,
    Json(request): Json<RewriteRequest>,
) -> Response
where
    D: TextDriver + 'static,
{
    if request.text().trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No text provided." })),
        )
            .into_response();
    }

    match process_rewrite(&state, &request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            error!(error = %err, "Rewrite request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Error processing text: {}", err) })),
            )
                .into_response()
        }
    }
}

/// Runs the generation chain for one rewrite request.
async fn process_rewrite<D>(
    state: &AppState<D>,
    request: &RewriteRequest,
) -> PalimpsestResult<RewriteResponse>
where
    D: TextDriver,
{
    let text = request.text().trim();
    let rewritten = state
        .driver
        .generate(&GenerateRequest::new(rewrite_prompt(
            text,
            request.mode(),
            request.language(),
        )))
        .await?;

    let summary = if *request.summarize_option() {
        Some(
            state
                .driver
                .generate(&GenerateRequest::new(summarize_prompt(&rewritten)))
                .await?,
        )
    } else {
        None
    };

    let expansion = if *request.expand_option() {
        Some(
            state
                .driver
                .generate(&GenerateRequest::new(expand_prompt(&rewritten)))
                .await?,
        )
    } else {
        None
    };

    let plagiarism = (*request.plagiarism_check()).then(plagiarism::simulate_plagiarism_check);

    Ok(RewriteResponse::builder()
        .rewritten(rewritten)
        .summary(summary)
        .expansion(expansion)
        .plagiarism(plagiarism)
        .build()
        .expect("Valid RewriteResponse"))
}

/// Attaches the fixed security header set to every response.
async fn secure_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    for (name, value) in SECURE_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}
