//! Core data types for the Palimpsest rewriting service.
//!
//! This crate provides the foundation data types shared by the model
//! integration and the HTTP service.

mod request;

pub use request::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_RETRIES, DEFAULT_TEMPERATURE, GenerateRequest,
    GenerateRequestBuilder,
};
