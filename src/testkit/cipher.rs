//! Reversible [`Cipher`] fake with no real cryptography.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::error::{Error, Result};
use crate::port::outbound::cipher::Cipher;

const PREFIX: &str = "mock:";

/// Encodes text as `mock:<base64>`.
///
/// Tokens without the prefix, or whose payload is not base64 of UTF-8,
/// fail with [`Error::Crypto`]. A second instance decrypts the first's
/// tokens unless built with a different label.
pub struct MockCipher {
    label: String,
}

impl MockCipher {
    pub fn new() -> Self {
        Self::labelled("")
    }

    /// Cipher whose tokens only decrypt under the same `label`, standing in
    /// for a distinct key.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn prefix(&self) -> String {
        format!("{PREFIX}{}:", self.label)
    }
}

impl Default for MockCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for MockCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(format!("{}{}", self.prefix(), URL_SAFE.encode(plaintext)))
    }

    fn decrypt(&self, token: &str) -> Result<String> {
        let payload = token
            .strip_prefix(&self.prefix())
            .ok_or_else(|| Error::Crypto("not a token for this key".into()))?;
        let bytes = URL_SAFE
            .decode(payload)
            .map_err(|e| Error::Crypto(format!("malformed token: {e}")))?;
        String::from_utf8(bytes).map_err(|e| Error::Crypto(format!("not UTF-8: {e}")))
    }
}
