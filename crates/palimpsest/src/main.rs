//! Palimpsest binary entry point.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve => cli::handle_serve_command().await?,
        Commands::Generate {
            prompt,
            temperature,
            max_output_tokens,
            retries,
        } => cli::handle_generate_command(prompt, temperature, max_output_tokens, retries).await?,
    }

    Ok(())
}
