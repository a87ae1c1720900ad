//! LLM completion port.
//!
//! Defines a generic interface for large language model completion requests.
//! Used by the completion client, which layers retry on top.

use async_trait::async_trait;

use crate::domain::completion::CompletionRequest;
use crate::error::Result;

/// Client for large language model text completion.
///
/// Implementations wrap specific providers (Groq, OpenAI, ...) and handle
/// authentication and response decoding. A single call is a single
/// attempt; retry policy lives in
/// [`CompletionClient`](crate::application::completion::client::CompletionClient).
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) so one instance can
/// serve concurrent requests.
///
/// # Errors
///
/// The [`complete`](Self::complete) method returns an error for missing
/// credentials, transport failures, non-success statuses, or responses
/// without content.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::error::Error::Config) before any
    /// network activity if credentials are missing, and a transient error
    /// if the provider call fails or returns no content.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
