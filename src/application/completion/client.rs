//! Retrying wrapper around an [`Llm`] port.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

use super::config::RetryConfig;
use crate::domain::completion::CompletionRequest;
use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Sends prompts to the configured provider and masks transient failures.
///
/// The model identifier and temperature are fixed at construction from
/// process configuration. Each call is independent: no state is shared
/// between concurrent completions beyond the read-only provider handle.
pub struct CompletionClient {
    llm: Arc<dyn Llm>,
    model: String,
    temperature: f64,
    retry: RetryConfig,
}

impl CompletionClient {
    pub fn new(
        llm: Arc<dyn Llm>,
        model: impl Into<String>,
        temperature: f64,
        retry: RetryConfig,
    ) -> Self {
        Self {
            llm,
            model: model.into(),
            temperature,
            retry,
        }
    }

    /// Provider name, for logs.
    #[must_use]
    pub fn provider(&self) -> &'static str {
        self.llm.name()
    }

    /// Build a request for `prompt` using the configured model and policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for a blank prompt or a zero
    /// attempt budget.
    pub fn request(&self, prompt: impl Into<String>) -> Result<CompletionRequest> {
        CompletionRequest::try_new(
            prompt,
            self.model.as_str(),
            self.temperature,
            self.retry.max_retries,
        )
    }

    /// Complete `prompt`, retrying transient failures.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn complete(&self, prompt: impl Into<String>) -> Result<String> {
        let request = self.request(prompt)?;
        self.execute(&request).await
    }

    /// Run `request` for up to `request.max_retries()` attempts.
    ///
    /// Empty or whitespace-only content counts as a failed attempt.
    /// Non-transient errors (missing credentials, invalid request) return
    /// immediately without another attempt.
    ///
    /// # Errors
    ///
    /// Returns the non-transient error as-is, or
    /// [`Error::RetriesExhausted`] carrying the last cause once every
    /// attempt has failed.
    pub async fn execute(&self, request: &CompletionRequest) -> Result<String> {
        let span = info_span!(
            "completion",
            call_id = %Uuid::new_v4(),
            provider = self.llm.name(),
            model = request.model(),
        );
        self.run_attempts(request).instrument(span).await
    }

    async fn run_attempts(&self, request: &CompletionRequest) -> Result<String> {
        let max_attempts = request.max_retries();
        let mut attempt = 0;

        loop {
            attempt += 1;

            let outcome = match self.llm.complete(request).await {
                Ok(text) if text.trim().is_empty() => Err(Error::EmptyResponse),
                other => other,
            };

            match outcome {
                Ok(text) => {
                    debug!(attempt, chars = text.len(), "completion succeeded");
                    return Ok(text);
                }
                Err(err) if !err.is_transient() => {
                    error!(attempt, error = %err, "completion failed, not retrying");
                    return Err(err);
                }
                Err(err) if attempt >= max_attempts => {
                    error!(attempts = attempt, error = %err, "completion retries exhausted");
                    return Err(Error::RetriesExhausted {
                        attempts: attempt,
                        source: Box::new(err),
                    });
                }
                Err(err) => {
                    let delay = self.backoff_delay(attempt);
                    warn!(
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "completion attempt failed, retrying"
                    );
                    sleep(delay).await;
                }
            }
        }
    }

    /// Delay to wait after failed attempt number `attempt` (1-based).
    ///
    /// `initial_delay_ms * backoff_multiplier^(attempt - 1)`, capped at
    /// `max_delay_ms`.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(32) as i32;
        let raw = self.retry.initial_delay_ms as f64 * self.retry.backoff_multiplier.powi(exponent);
        let capped = raw.min(self.retry.max_delay_ms as f64).max(0.0);
        Duration::from_millis(capped as u64)
    }
}
