//! Gemini REST integration: wire types, client, and retry policy.

mod client;
mod dto;
mod retry;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use dto::{
    Candidate, CandidateContent, CandidatePart, Content, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part,
};
pub use retry::RetryPolicy;
