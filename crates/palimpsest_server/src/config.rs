//! Configuration for the rewriting service.

use derive_getters::Getters;
use palimpsest_error::ConfigError;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
const DEFAULT_PORT: u16 = 5000;

/// Maximum accepted request body size in bytes (16 MiB).
pub const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Security headers attached to every response.
pub const SECURE_HEADERS: [(&str, &str); 5] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-xss-protection", "1; mode=block"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    (
        "content-security-policy",
        "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; font-src 'self' https://fonts.gstatic.com",
    ),
];

/// Service configuration, read once at startup and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// API key for the generation endpoint
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL of the generation endpoint
    #[builder(default = "palimpsest_models::DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Bind host
    #[builder(default = "DEFAULT_HOST.to_string()")]
    host: String,
    /// Bind port
    #[builder(default = "DEFAULT_PORT")]
    port: u16,
    /// Verbose logging default
    #[builder(default = "false")]
    debug: bool,
}

impl ServerConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (required)
    /// - `GEMINI_MODEL` (default: "gemini-2.0-flash")
    /// - `GEMINI_BASE_URL` (default: the public generative-language endpoint)
    /// - `HOST` (default: "0.0.0.0")
    /// - `PORT` (default: 5000)
    /// - `DEBUG` (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            ConfigError::new("GEMINI_API_KEY not found. Please add it to the environment or .env")
        })?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| palimpsest_models::DEFAULT_BASE_URL.to_string());
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::new(format!("invalid PORT value: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };
        let debug = std::env::var("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(ServerConfigBuilder::default()
            .api_key(api_key)
            .model(model)
            .base_url(base_url)
            .host(host)
            .port(port)
            .debug(debug)
            .build()
            .expect("Valid ServerConfig"))
    }

    /// Returns a builder for constructing a ServerConfig.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_service_defaults() {
        let config = ServerConfig::builder()
            .api_key("key")
            .build()
            .expect("Valid ServerConfig");
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(*config.port(), 5000);
        assert!(!config.debug());
    }
}
