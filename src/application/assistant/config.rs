//! Note assistant configuration.

use serde::Deserialize;

/// Behavior of the note assistant service.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Absorb provider failures into task fallbacks instead of failing.
    ///
    /// When false (default), missing credentials and exhausted retries
    /// surface to the caller as errors.
    #[serde(default)]
    pub degrade_on_provider_error: bool,
    /// Language used when a translation request names none.
    #[serde(default = "default_target_language")]
    pub default_target_language: String,
}

fn default_target_language() -> String {
    "English".into()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            degrade_on_provider_error: false,
            default_target_language: default_target_language(),
        }
    }
}
