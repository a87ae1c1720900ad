//! LLM provider configuration.
//!
//! Provides configuration for the chat completion provider backing the
//! note assistant.

use std::time::Duration;

use serde::Deserialize;

/// LLM provider configuration.
///
/// Configures which provider to use and the sampling settings shared by
/// every task. The API key is read from the provider's environment
/// variable (`GROQ_API_KEY` or `OPENAI_API_KEY`) and never from the file.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// LLM provider to use. Defaults to Groq.
    #[serde(default)]
    pub provider: LlmProvider,

    /// Model identifier.
    ///
    /// Defaults to "moonshotai/kimi-k2-instruct-0905".
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for generation.
    ///
    /// Lower values produce more deterministic output.
    /// Defaults to 0.2.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response. Defaults to 4096.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Per-request timeout in seconds. Defaults to 30.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Override for the provider's API base URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key, loaded from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl LlmConfig {
    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
            base_url: None,
            api_key: None,
        }
    }
}

/// LLM provider selection.
///
/// Both providers speak the OpenAI chat completions protocol; they differ
/// in endpoint and credential variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Groq hosted models.
    #[default]
    Groq,
    /// OpenAI GPT models.
    OpenAi,
}

impl LlmProvider {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
        }
    }

    /// Environment variable holding the API key.
    #[must_use]
    pub const fn api_key_var(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }

    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com/openai/v1",
            Self::OpenAi => "https://api.openai.com/v1",
        }
    }
}

fn default_model() -> String {
    "moonshotai/kimi-k2-instruct-0905".into()
}

fn default_temperature() -> f64 {
    0.2
}

const fn default_max_tokens() -> usize {
    4096
}

const fn default_request_timeout_secs() -> u64 {
    30
}
