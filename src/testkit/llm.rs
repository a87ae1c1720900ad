//! Mock [`Llm`] implementations for testing.
//!
//! - [`MockLlm`] - Returns the same response on every call.
//! - [`ScriptedLlm`] - Pops a pre-loaded result per call and records prompts.
//!   Best for: retry bounds, empty-response handling, fallback paths.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::completion::CompletionRequest;
use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

// ---------------------------------------------------------------------------
// MockLlm
// ---------------------------------------------------------------------------

/// An LLM that always answers with the same text.
pub struct MockLlm {
    response: String,
}

impl MockLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
        Ok(self.response.clone())
    }
}

// ---------------------------------------------------------------------------
// ScriptedLlm
// ---------------------------------------------------------------------------

/// An LLM with a queue of scripted results.
///
/// Each call to `complete()` pops the next result. When the queue is
/// exhausted every further call fails with [`Error::Connection`].
pub struct ScriptedLlm {
    results: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicU32,
}

impl ScriptedLlm {
    pub fn new(results: Vec<Result<String>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicU32::new(0),
        }
    }

    /// Script that fails `failures` times with a connection error, then
    /// answers with `response`.
    pub fn failing_then(failures: usize, response: impl Into<String>) -> Self {
        let mut results: Vec<Result<String>> = (0..failures)
            .map(|i| Err(Error::Connection(format!("scripted failure {}", i + 1))))
            .collect();
        results.push(Ok(response.into()));
        Self::new(results)
    }

    /// Script that answers with empty content `count` times.
    pub fn empty(count: usize) -> Self {
        Self::new((0..count).map(|_| Ok(String::new())).collect())
    }

    /// Number of `complete()` calls made so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    /// The most recent prompt, if any call was made.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts().pop()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(request.prompt().to_string());
        }
        let next = self
            .results
            .lock()
            .ok()
            .and_then(|mut results| results.pop_front());
        next.unwrap_or_else(|| Err(Error::Connection("script exhausted".into())))
    }
}
