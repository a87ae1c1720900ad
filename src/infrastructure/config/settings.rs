//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for secrets (`GROQ_API_KEY`, `OPENAI_API_KEY`, `ENCRYPTION_KEY`) and for
//! deployment settings (`PORT`, `ALLOWED_ORIGINS`).
//!
//! # Example
//!
//! ```no_run
//! use notez::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::application::assistant::config::AssistantConfig;
use crate::application::completion::config::RetryConfig;
use crate::error::{ConfigError, Result};

/// Variable holding the note encryption key.
pub const ENCRYPTION_KEY_VAR: &str = "ENCRYPTION_KEY";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults. Load from
/// a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener and CORS settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM provider configuration.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Retry policy for completion calls.
    #[serde(default)]
    pub retry: RetryConfig,

    /// Note assistant behavior.
    #[serde(default)]
    pub ai: AssistantConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Note encryption key, loaded from `ENCRYPTION_KEY`.
    ///
    /// Never read from the config file.
    #[serde(skip)]
    pub encryption_key: Option<String>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies overrides from the process environment, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - An environment override is malformed (e.g., non-numeric `PORT`)
    /// - Validation fails (e.g., zero `max_retries`)
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |name| std::env::var(name).ok())
    }

    /// Parse configuration from TOML content with a custom variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::parse_toml`].
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Apply environment variable overrides.
    ///
    /// Blank values are treated as unset.
    #[allow(clippy::result_large_err)]
    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        self.llm.api_key = var(self.llm.provider.api_key_var());
        self.encryption_key = var(ENCRYPTION_KEY_VAR).map(|key| key.trim().to_string());

        if let Some(port) = var("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("{port:?} is not a valid port"),
            })?;
        }

        if let Some(origins) = var("ALLOWED_ORIGINS") {
            self.server.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "model" }.into());
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: "must be between 0 and 2".to_string(),
            }
            .into());
        }
        if self.llm.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.llm.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.retry.max_retries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_retries",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.retry.max_delay_ms < self.retry.initial_delay_ms {
            return Err(ConfigError::InvalidValue {
                field: "max_delay_ms",
                reason: "must be >= initial_delay_ms".to_string(),
            }
            .into());
        }
        if self.retry.backoff_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "backoff_multiplier",
                reason: "must be >= 1.0".to_string(),
            }
            .into());
        }

        if self.ai.default_target_language.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "default_target_language",
            }
            .into());
        }

        if self.server.allowed_origins.is_empty() {
            return Err(ConfigError::MissingField {
                field: "allowed_origins",
            }
            .into());
        }
        self.server.cors_layer()?;

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
