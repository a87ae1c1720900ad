//! Handler for `config check`.

use std::path::Path;

use super::config::load_config;
use super::output;
use crate::adapter::outbound::cipher::chacha::ChaChaCipher;
use crate::infrastructure::config::settings::{Config, ENCRYPTION_KEY_VAR};

/// Validate configuration without starting the service.
pub fn execute(path: Option<&Path>) -> miette::Result<()> {
    let config = load_config(path)?;

    output::section("Configuration Check");
    match path {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "config.toml (optional)"),
    }
    output::success("Configuration is valid");

    report(&config);
    Ok(())
}

fn report(config: &Config) {
    output::section("Summary");
    output::field("Listen", config.server.bind_addr());
    output::field("Origins", config.server.allowed_origins.join(", "));
    output::field("Provider", config.llm.provider.name());
    output::field("Endpoint", config.llm.base_url());
    output::field("Model", &config.llm.model);
    output::field("Attempts", config.retry.max_retries);
    output::field("Degrade", config.ai.degrade_on_provider_error);

    let key_var = config.llm.provider.api_key_var();
    if config.llm.api_key.is_some() {
        output::success(&format!("{key_var} detected"));
    } else {
        output::warning(&format!("{key_var} not set, AI routes will fail"));
    }

    match config.encryption_key.as_deref().map(ChaChaCipher::from_key_str) {
        Some(Ok(_)) => output::success(&format!("{ENCRYPTION_KEY_VAR} is valid")),
        Some(Err(e)) => output::warning(&format!("{ENCRYPTION_KEY_VAR} is invalid: {e}")),
        None => output::warning(&format!(
            "{ENCRYPTION_KEY_VAR} not set, security routes will fail (run `notez keygen`)"
        )),
    }
}
