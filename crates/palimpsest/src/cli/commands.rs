//! CLI structure.

use clap::{Parser, Subcommand};
use palimpsest_core::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_RETRIES, DEFAULT_TEMPERATURE};

/// Text rewriting service backed by a generative-language API.
#[derive(Debug, Parser)]
#[command(name = "palimpsest", version, about)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP rewriting service
    Serve,
    /// Generate text for a single prompt and print it
    Generate {
        /// Prompt forwarded to the generation endpoint
        prompt: String,
        /// Sampling temperature
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
        temperature: f32,
        /// Upper bound on generated tokens
        #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_TOKENS)]
        max_output_tokens: u32,
        /// Attempt budget for the retry loop
        #[arg(long, default_value_t = DEFAULT_RETRIES)]
        retries: u32,
    },
}
