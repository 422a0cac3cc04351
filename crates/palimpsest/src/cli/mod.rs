//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! palimpsest binary.

mod commands;
mod generate;
mod serve;

pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
pub use serve::handle_serve_command;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured debug flag picks the
/// default level.
pub(crate) fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
