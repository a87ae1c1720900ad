//! Canonical test configurations.

use crate::application::completion::config::RetryConfig;

/// Retry policy with the default attempt budget and no waiting.
#[must_use]
pub fn fast_retry() -> RetryConfig {
    RetryConfig {
        initial_delay_ms: 0,
        max_delay_ms: 0,
        ..RetryConfig::default()
    }
}
