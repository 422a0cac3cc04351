//! Generative-language provider integration for Palimpsest.
//!
//! The [`GeminiClient`] wraps the REST generateContent endpoint with a
//! bounded retry loop and typed response parsing; the prompt builders
//! assemble the instruction templates the rewriting service feeds it.

mod gemini;
mod prompts;

pub use gemini::{
    Candidate, CandidateContent, CandidatePart, Content, DEFAULT_BASE_URL, GeminiClient,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, RetryPolicy,
};
pub use prompts::{expand_prompt, rewrite_prompt, summarize_prompt};
