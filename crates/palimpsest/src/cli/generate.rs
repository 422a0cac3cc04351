//! One-shot generation command handler.

use palimpsest_core::GenerateRequest;
use palimpsest_error::PalimpsestResult;
use palimpsest_models::GeminiClient;
use palimpsest_server::ServerConfig;

/// Handle the `generate` command
pub async fn handle_generate_command(
    prompt: String,
    temperature: f32,
    max_output_tokens: u32,
    retries: u32,
) -> PalimpsestResult<()> {
    let config = ServerConfig::from_env()?;
    super::init_tracing(*config.debug());

    let client = GeminiClient::new(
        config.api_key().clone(),
        config.model().clone(),
        config.base_url().clone(),
    )?;
    let request = GenerateRequest::builder()
        .prompt(prompt)
        .temperature(temperature)
        .max_output_tokens(max_output_tokens)
        .retries(retries)
        .build()
        .expect("Valid GenerateRequest");

    let text = client.generate(&request).await?;
    println!("{text}");
    Ok(())
}
