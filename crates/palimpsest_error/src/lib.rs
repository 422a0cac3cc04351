//! Error types for the Palimpsest rewriting service.
//!
//! Each subsystem gets its own error type with source location tracking;
//! `PalimpsestError` aggregates them for callers that cross subsystem
//! boundaries.

mod config;
mod gemini;
mod server;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use server::ServerError;

/// Top-level error type spanning all subsystems.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum PalimpsestError {
    /// Startup configuration failure.
    #[display("{}", _0)]
    Config(ConfigError),
    /// Failure in the generation endpoint wrapper.
    #[display("{}", _0)]
    Gemini(GeminiError),
    /// Failure in the HTTP service.
    #[display("{}", _0)]
    Server(ServerError),
}

impl std::error::Error for PalimpsestError {}

/// Convenience alias used across the workspace.
pub type PalimpsestResult<T> = Result<T, PalimpsestError>;
