//! Composition root: wires configuration into the HTTP application state.

use std::sync::Arc;

use tracing::info;

use crate::adapter::inbound::http::state::AppState;
use crate::application::assistant::service::NoteAssistant;
use crate::application::completion::client::CompletionClient;
use crate::application::vault::NoteVault;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::cipher::build_cipher;
use crate::infrastructure::factory::llm::build_llm_client;
use crate::port::outbound::cipher::Cipher;
use crate::port::outbound::llm::Llm;

/// Build application state from configuration.
///
/// # Errors
///
/// Returns an error if the LLM client cannot be built or the encryption
/// key is malformed.
pub fn build_app_state(config: &Config) -> Result<AppState> {
    let llm = build_llm_client(config)?;
    let cipher = build_cipher(config)?;
    Ok(assemble(config, llm, cipher))
}

/// Assemble application state around explicit adapters.
///
/// Used by [`build_app_state`] and by tests that substitute fakes for the
/// provider or cipher.
pub fn assemble(
    config: &Config,
    llm: Arc<dyn Llm>,
    cipher: Option<Arc<dyn Cipher>>,
) -> AppState {
    let completion = CompletionClient::new(
        llm,
        config.llm.model.as_str(),
        config.llm.temperature,
        config.retry.clone(),
    );
    let vault = NoteVault::new(cipher);
    info!(
        provider = completion.provider(),
        encryption = vault.is_configured(),
        "application state assembled"
    );
    AppState {
        assistant: Arc::new(NoteAssistant::new(completion, config.ai.clone())),
        vault: Arc::new(vault),
    }
}
