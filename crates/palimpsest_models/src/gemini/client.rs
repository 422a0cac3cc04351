//! Client for the generateContent REST endpoint.

use crate::gemini::dto::{GenerateContentRequest, GenerateContentResponse};
use crate::gemini::retry::{self, RetryPolicy};
use async_trait::async_trait;
use palimpsest_core::GenerateRequest;
use palimpsest_error::{GeminiError, GeminiErrorKind, PalimpsestResult};
use palimpsest_interface::TextDriver;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Default REST endpoint for the generative-language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1/models";

/// Per-attempt timeout. Not cumulative across retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a generateContent-style text endpoint.
///
/// Holds the immutable endpoint configuration for the process lifetime;
/// individual calls share nothing beyond it.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    policy: RetryPolicy,
}

impl GeminiClient {
    /// Creates a new client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[instrument(skip(api_key, base_url), fields(model = %model))]
    pub fn new(api_key: String, model: String, base_url: String) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(model = %model, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
            policy: RetryPolicy::default(),
        })
    }

    /// Replaces the retry backoff parameters.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Generates text for the request, retrying transient failures.
    ///
    /// Makes up to `request.retries()` attempts. Returns the trimmed text
    /// of the first candidate on success; otherwise the last attempt's
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint answers with a non-retryable
    /// status, or when the attempt budget is exhausted by transport
    /// failures, overload, or unusable response bodies.
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, GeminiError> {
        retry::generate_with_retry(self, request, &self.policy).await
    }

    /// One full request/response cycle against the endpoint.
    pub(crate) async fn generate_once(
        &self,
        request: &GenerateRequest,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key,
        );
        let payload = GenerateContentRequest::from(request);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            warn!(model = %self.model, "Generation endpoint overloaded");
            return Err(GeminiError::new(GeminiErrorKind::Overloaded));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            // Carry the parsed JSON error when the endpoint sent one, the
            // raw text otherwise.
            let body = match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(json) => json.to_string(),
                Err(_) => body,
            };
            error!(status = status.as_u16(), error = %body, "API error");
            return Err(GeminiError::new(GeminiErrorKind::Api {
                status: status.as_u16(),
                body,
            }));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, raw = %body, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::MalformedResponse(e.to_string()))
        })?;

        match parsed.first_text() {
            Some(text) => Ok(text.trim().to_string()),
            None => {
                warn!(model = %self.model, "No valid text in response");
                Err(GeminiError::new(GeminiErrorKind::NoText))
            }
        }
    }
}

#[async_trait]
impl TextDriver for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> PalimpsestResult<String> {
        Ok(GeminiClient::generate(self, request).await?)
    }
}
