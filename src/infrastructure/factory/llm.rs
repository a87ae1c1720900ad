//! LLM client factory.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::llm::openai::OpenAi;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;

/// Build LLM client from configuration.
///
/// A missing API key does not prevent startup: the client is still built
/// and every completion fails with a configuration error naming the key.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_llm_client(config: &Config) -> Result<Arc<dyn Llm>> {
    let provider = config.llm.provider;
    let client = OpenAi::new(
        provider.name(),
        provider.api_key_var(),
        config.llm.api_key.clone(),
        config.llm.base_url(),
        config.llm.max_tokens,
        config.llm.request_timeout(),
    )?;
    if !client.has_api_key() {
        warn!(
            provider = provider.name(),
            "{} not set, AI requests will fail",
            provider.api_key_var()
        );
    }
    let client: Arc<dyn Llm> = Arc::new(client);

    info!(
        provider = client.name(),
        model = %config.llm.model,
        "LLM client initialized"
    );
    Ok(client)
}
