//! Note vault: encrypt and decrypt note text.

use std::sync::Arc;

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::port::outbound::cipher::Cipher;

/// Encrypts and decrypts note text with the configured cipher.
///
/// The cipher is optional so the service can start without a key; the
/// security operations then fail with a configuration error while the
/// assistant keeps working.
pub struct NoteVault {
    cipher: Option<Arc<dyn Cipher>>,
}

impl NoteVault {
    pub fn new(cipher: Option<Arc<dyn Cipher>>) -> Self {
        Self { cipher }
    }

    /// Whether a cipher key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.cipher.is_some()
    }

    /// Encrypt `text`. Empty text encrypts to empty text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no key is set, or a crypto error
    /// from the cipher.
    pub fn encrypt(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let token = self.cipher()?.encrypt(text)?;
        debug!(plaintext_len = text.len(), token_len = token.len(), "encrypted note");
        Ok(token)
    }

    /// Decrypt `token`. Empty input decrypts to empty text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no key is set, or a crypto error
    /// for tokens that do not decrypt under the configured key.
    pub fn decrypt(&self, token: &str) -> Result<String> {
        if token.is_empty() {
            return Ok(String::new());
        }
        let text = self.cipher()?.decrypt(token)?;
        debug!(token_len = token.len(), "decrypted note");
        Ok(text)
    }

    fn cipher(&self) -> Result<&dyn Cipher> {
        self.cipher.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: "ENCRYPTION_KEY",
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testkit::cipher::MockCipher;

    fn vault() -> NoteVault {
        NoteVault::new(Some(Arc::new(MockCipher::new())))
    }

    #[test]
    fn round_trips_text() {
        let vault = vault();
        for text in ["hello", "<p>Secret <b>note</b></p>", "émoji 🔐 and newlines\n\n", " "] {
            let token = vault.encrypt(text).unwrap();
            assert_ne!(token, text);
            assert_eq!(vault.decrypt(&token).unwrap(), text);
        }
    }

    #[test]
    fn empty_short_circuits_without_cipher() {
        let vault = NoteVault::new(None);
        assert_eq!(vault.encrypt("").unwrap(), "");
        assert_eq!(vault.decrypt("").unwrap(), "");
    }

    #[test]
    fn missing_key_is_config_error() {
        let vault = NoteVault::new(None);
        assert!(!vault.is_configured());
        assert!(matches!(
            vault.encrypt("x"),
            Err(Error::Config(ConfigError::MissingField {
                field: "ENCRYPTION_KEY"
            }))
        ));
        assert!(matches!(vault.decrypt("x"), Err(Error::Config(_))));
    }

    #[test]
    fn garbage_token_is_crypto_error() {
        assert!(matches!(
            vault().decrypt("definitely not a token"),
            Err(Error::Crypto(_))
        ));
    }

    #[test]
    fn token_from_other_key_fails() {
        let token = vault().encrypt("private").unwrap();
        let other = NoteVault::new(Some(Arc::new(MockCipher::labelled("other"))));
        assert!(matches!(other.decrypt(&token), Err(Error::Crypto(_))));
    }
}
