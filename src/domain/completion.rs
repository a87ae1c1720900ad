//! Completion request value type.

use crate::error::{Error, Result};

/// A single prompt bound for the completion service.
///
/// Constructed through [`CompletionRequest::try_new`], which enforces a
/// non-empty prompt and at least one attempt. The model identifier and
/// sampling temperature come from process configuration, never from the
/// end user.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    prompt: String,
    model: String,
    temperature: f64,
    max_retries: u32,
}

impl CompletionRequest {
    /// Validate and build a completion request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the prompt is blank or
    /// `max_retries` is zero.
    pub fn try_new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
        max_retries: u32,
    ) -> Result<Self> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(Error::InvalidRequest("prompt must not be empty".into()));
        }
        if max_retries == 0 {
            return Err(Error::InvalidRequest(
                "max_retries must be at least 1".into(),
            ));
        }
        Ok(Self {
            prompt,
            model: model.into(),
            temperature,
            max_retries,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Total number of attempts the client may make.
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_prompt() {
        let result = CompletionRequest::try_new("   \n", "model", 0.2, 2);
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn rejects_zero_retries() {
        let result = CompletionRequest::try_new("hello", "model", 0.2, 0);
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn keeps_fields() {
        let request = CompletionRequest::try_new("hello", "kimi", 0.5, 3).unwrap();
        assert_eq!(request.prompt(), "hello");
        assert_eq!(request.model(), "kimi");
        assert_eq!(request.temperature(), 0.5);
        assert_eq!(request.max_retries(), 3);
    }
}
