//! OpenAI-compatible chat completions client.
//!
//! Provides an implementation of the [`Llm`] trait for any provider that
//! speaks the OpenAI Chat Completions protocol (Groq, OpenAI).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::completion::CompletionRequest;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::Llm;

/// Longest provider error body echoed into an error message.
const MAX_ERROR_BODY: usize = 512;

/// OpenAI-compatible API client.
///
/// A missing API key is not a construction error: the client is built so
/// the service can start, and every call fails fast with a configuration
/// error naming the variable to set.
pub struct OpenAi {
    /// HTTP client for API requests (carries the request timeout).
    client: Client,
    /// Provider name for logs.
    name: &'static str,
    /// Environment variable the API key comes from.
    key_var: &'static str,
    /// API key for bearer authentication.
    api_key: Option<String>,
    /// Full chat completions endpoint URL.
    endpoint: String,
    /// Maximum tokens to generate in the response.
    max_tokens: usize,
}

impl OpenAi {
    /// Create a client for the provider at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        name: &'static str,
        key_var: &'static str,
        api_key: Option<String>,
        base_url: &str,
        max_tokens: usize,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            name,
            key_var,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            max_tokens,
        })
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    max_tokens: usize,
    temperature: f64,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl Response {
    /// Content of the first choice, if it has any non-blank text.
    fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
    }
}

#[async_trait]
impl Llm for OpenAi {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingField {
                field: self.key_var,
            })?;

        let body = Request {
            model: request.model(),
            max_tokens: self.max_tokens,
            temperature: request.temperature(),
            messages: vec![Message {
                role: "user",
                content: request.prompt(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut detail = response.text().await.unwrap_or_default();
            if detail.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| detail.is_char_boundary(i))
                    .unwrap_or(0);
                detail.truncate(cut);
            }
            return Err(Error::Connection(format!(
                "{} returned {status}: {detail}",
                self.name
            )));
        }

        let content = response
            .json::<Response>()
            .await?
            .into_content()
            .ok_or(Error::EmptyResponse)?;
        debug!(provider = self.name, chars = content.len(), "received completion");
        Ok(content)
    }
}
