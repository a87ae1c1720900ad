//! Note cipher factory.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::cipher::chacha::ChaChaCipher;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, ENCRYPTION_KEY_VAR};
use crate::port::outbound::cipher::Cipher;

/// Build the note cipher from configuration.
///
/// Returns `None` when no key is configured; security endpoints then
/// report a configuration error.
///
/// # Errors
///
/// Returns an error if a key is set but is not valid key material.
pub fn build_cipher(config: &Config) -> Result<Option<Arc<dyn Cipher>>> {
    let Some(key) = config.encryption_key.as_deref() else {
        warn!(
            "{ENCRYPTION_KEY_VAR} not set, encryption disabled (generate one with `notez keygen`)"
        );
        return Ok(None);
    };

    let cipher = ChaChaCipher::from_key_str(key)?;
    info!("note cipher initialized");
    Ok(Some(Arc::new(cipher)))
}
