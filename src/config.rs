//! Application configuration loaded from environment variables.
//!
//! The deployment host identifier is read once at startup and injected into
//! the API client; views never read the environment themselves.

use std::env;

/// Default listen port for the dashboard.
const DEFAULT_PORT: u16 = 3000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Codespace / deployment host identifier, if one was configured
    pub codespace_name: Option<String>,
    /// Base URL of the OctoFit REST API (no trailing slash)
    pub api_base_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `API_BASE_URL` wins when set; otherwise the base URL is derived from
    /// `CODESPACE_NAME`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let codespace_name = env::var("CODESPACE_NAME")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let api_base_url = match env::var("API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => codespace_name
                .as_deref()
                .map(api_base_url_for_codespace)
                .ok_or(ConfigError::Missing("CODESPACE_NAME"))?,
        };

        Ok(Self {
            codespace_name,
            api_base_url,
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
        })
    }

    /// Config for tests pointing at the given API base URL.
    pub fn test_default(api_base_url: &str) -> Self {
        Self {
            codespace_name: None,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Build the API base URL for a codespace host identifier.
pub fn api_base_url_for_codespace(codespace_name: &str) -> String {
    format!("https://{}-8000.app.github.dev/api", codespace_name)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
