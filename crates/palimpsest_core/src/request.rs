//! Request types for text generation.

use serde::{Deserialize, Serialize};

/// Sampling temperature used by the prompt-builder paths.
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
/// Output token cap used by the prompt-builder paths.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 900;
/// Attempt budget for the retry loop. Attempts equal this value, not
/// this value plus one.
pub const DEFAULT_RETRIES: u32 = 3;

/// A single text-generation request.
///
/// Built per call and discarded after use; nothing here outlives one
/// invocation of the generator.
///
/// # Examples
///
/// ```
/// use palimpsest_core::{GenerateRequest, DEFAULT_TEMPERATURE};
///
/// let request = GenerateRequest::new("Say hello.");
/// assert_eq!(request.prompt(), "Say hello.");
/// assert_eq!(*request.temperature(), DEFAULT_TEMPERATURE);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The prompt forwarded verbatim to the generation endpoint
    prompt: String,
    /// Sampling temperature, expected in 0.0..=1.0
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Upper bound on generated tokens
    #[builder(default = "DEFAULT_MAX_OUTPUT_TOKENS")]
    max_output_tokens: u32,
    /// Attempt budget for the retry loop
    #[builder(default = "DEFAULT_RETRIES")]
    retries: u32,
}

impl GenerateRequest {
    /// Creates a request with the default generation parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerateRequestBuilder::default()
            .prompt(prompt)
            .build()
            .expect("Valid GenerateRequest")
    }

    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}
