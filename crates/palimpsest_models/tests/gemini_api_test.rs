//! Tests that exercise the real generative-language endpoint.
//!
//! Run with: cargo test --package palimpsest_models --features api

use palimpsest_core::GenerateRequest;
use palimpsest_models::{DEFAULT_BASE_URL, GeminiClient};
use std::env;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_simple_generation() {
    dotenvy::dotenv().ok();
    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set for API tests");
    let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

    let client = GeminiClient::new(api_key, model, DEFAULT_BASE_URL.to_string())
        .expect("Valid GeminiClient");

    let request = GenerateRequest::new("Say 'test' and nothing else.");
    let text = client.generate(&request).await.expect("API call succeeded");

    assert!(!text.is_empty());
    println!("Response: {text}");
}
