//! Wire types for the generateContent REST endpoint.

use palimpsest_core::GenerateRequest;
use serde::{Deserialize, Serialize};

/// A text part in an outbound request.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    /// Prompt text
    pub text: String,
}

/// One content block wrapping the prompt parts.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Prompt parts
    pub parts: Vec<Part>,
}

/// Generation parameters forwarded verbatim to the endpoint.
#[derive(Debug, Clone, Serialize, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    temperature: f32,
    /// Upper bound on generated tokens
    max_output_tokens: u32,
}

/// Outbound request body for generateContent.
#[derive(Debug, Clone, Serialize, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Prompt content blocks
    contents: Vec<Content>,
    /// Generation parameters
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a new builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

impl From<&GenerateRequest> for GenerateContentRequest {
    fn from(request: &GenerateRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt().clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: *request.temperature(),
                max_output_tokens: *request.max_output_tokens(),
            },
        }
    }
}

/// Inbound response body for generateContent.
///
/// Every level is optional. The endpoint is treated as loosely structured;
/// a missing piece anywhere in the chain surfaces as a no-text condition
/// rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Proposed generations; only the first is consulted
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One proposed generation.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content, absent on filtered or empty candidates
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content block of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Generated parts
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// One part of a candidate's content.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    /// Generated text, absent for non-text parts
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if the full chain
    /// resolves.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_the_wire_shape() {
        let request = GenerateRequest::new("Say hello.");
        let body = GenerateContentRequest::from(&request);
        let value = serde_json::to_value(&body).expect("serializable request");

        assert_eq!(value["contents"][0]["parts"][0]["text"], "Say hello.");
        let temperature = value["generationConfig"]["temperature"]
            .as_f64()
            .expect("temperature is a number");
        assert!((temperature - 0.6).abs() < 1e-6);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 900);
    }

    #[test]
    fn identical_requests_serialize_identically() {
        let a = GenerateContentRequest::from(&GenerateRequest::new("same text"));
        let b = GenerateContentRequest::from(&GenerateRequest::new("same text"));
        assert_eq!(
            serde_json::to_string(&a).expect("serializable"),
            serde_json::to_string(&b).expect("serializable"),
        );
    }

    #[test]
    fn well_formed_response_resolves_to_text() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "generated" } ] } }
            ]
        });
        let response: GenerateContentResponse =
            serde_json::from_value(body).expect("parseable response");
        assert_eq!(response.first_text(), Some("generated"));
    }

    #[test]
    fn empty_candidates_resolve_to_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).expect("parseable response");
        assert_eq!(response.first_text(), None);

        let response: GenerateContentResponse =
            serde_json::from_value(json!({})).expect("parseable response");
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn candidate_without_text_resolves_to_no_text() {
        let body = json!({
            "candidates": [ { "content": { "parts": [ {} ] } } ]
        });
        let response: GenerateContentResponse =
            serde_json::from_value(body).expect("parseable response");
        assert_eq!(response.first_text(), None);
    }
}
