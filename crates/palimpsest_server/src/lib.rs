//! HTTP service for the Palimpsest rewriting backend.
//!
//! Thin glue around the text driver: one rewrite route, a health check,
//! immutable startup configuration, and a fixed set of security response
//! headers.

mod config;
mod plagiarism;
mod request;
mod response;
mod routes;

pub use config::{
    DEFAULT_MODEL, MAX_CONTENT_LENGTH, SECURE_HEADERS, ServerConfig, ServerConfigBuilder,
};
pub use plagiarism::simulate_plagiarism_check;
pub use request::{RewriteRequest, RewriteRequestBuilder};
pub use response::RewriteResponse;
pub use routes::{AppState, create_router, run};
