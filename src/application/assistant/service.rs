//! Note assistant service: prompt orchestration over the completion client.

use tracing::{debug, info, warn};

use super::config::AssistantConfig;
use super::extract::parse_result;
use super::markup::strip_markup;
use super::prompt::build_prompt;
use crate::application::completion::client::CompletionClient;
use crate::domain::task::{ExtractionTask, ParsedResult};
use crate::error::Result;

/// Runs note assistant tasks end to end.
///
/// Shared read-only across requests; every call is independent.
pub struct NoteAssistant {
    completion: CompletionClient,
    config: AssistantConfig,
}

impl NoteAssistant {
    pub fn new(completion: CompletionClient, config: AssistantConfig) -> Self {
        Self { completion, config }
    }

    /// Translation task for `target_language`, or the configured default
    /// when it is blank.
    #[must_use]
    pub fn translation_task(&self, target_language: &str) -> ExtractionTask {
        let target_language = match target_language.trim() {
            "" => self.config.default_target_language.clone(),
            language => language.to_string(),
        };
        ExtractionTask::Translation { target_language }
    }

    /// Run `task` over `text`.
    ///
    /// Markup is stripped for extraction tasks and kept for grammar and
    /// translation. Input that is empty after preprocessing returns the
    /// task's neutral result without calling the provider. Malformed model
    /// output never fails: it maps to the task fallback.
    ///
    /// # Errors
    ///
    /// Propagates completion failures (missing credentials, exhausted
    /// retries) unless `degrade_on_provider_error` is set.
    pub async fn run(&self, task: &ExtractionTask, text: &str) -> Result<ParsedResult> {
        let prepared = if task.preserves_markup() {
            text.to_string()
        } else {
            strip_markup(text)
        };

        if prepared.trim().is_empty() {
            debug!(task = task.name(), "empty input, skipping completion");
            return Ok(task.neutral(text));
        }

        info!(
            task = task.name(),
            provider = self.completion.provider(),
            chars = prepared.len(),
            "running note task"
        );

        let prompt = build_prompt(task, &prepared);
        match self.completion.complete(prompt).await {
            Ok(raw) => Ok(parse_result(task, &raw, text)),
            Err(err) if self.config.degrade_on_provider_error => {
                warn!(task = task.name(), error = %err, "provider failed, degrading to fallback");
                Ok(task.fallback(text, &err.to_string()))
            }
            Err(err) => Err(err),
        }
    }
}
