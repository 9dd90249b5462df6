//! Configuration management for minagent.
//!
//! Configuration can be set via environment variables:
//! - `OPENROUTER_API_KEY` - Required. Your OpenRouter API key.
//! - `OPENROUTER_BASE_URL` - Optional. API base URL. Defaults to `https://openrouter.ai/api/v1`.
//! - `MODEL` - Optional. The LLM model to use. Defaults to `anthropic/claude-haiku-4.5`.
//! - `WORKSPACE_PATH` - Optional. The workspace directory. Defaults to current directory.

use std::path::PathBuf;
use thiserror::Error;

/// Default OpenRouter endpoint when `OPENROUTER_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model when `MODEL` is unset.
pub const DEFAULT_MODEL: &str = "anthropic/claude-haiku-4.5";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter API key
    pub api_key: String,

    /// API base URL (OpenRouter format)
    pub base_url: String,

    /// LLM model identifier (OpenRouter format)
    pub model: String,

    /// Workspace directory for file operations and shell commands
    pub workspace_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENROUTER_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let base_url = std::env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = std::env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let workspace_path = std::env::var("WORKSPACE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        Ok(Self {
            api_key,
            base_url,
            model,
            workspace_path,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, model: String, workspace_path: PathBuf) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            workspace_path,
        }
    }
}
