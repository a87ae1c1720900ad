//! Symmetric text encryption port.

use crate::error::Result;

/// Authenticated symmetric cipher over UTF-8 text.
///
/// Tokens produced by [`encrypt`](Self::encrypt) are printable ASCII and
/// only decrypt under the same key.
pub trait Cipher: Send + Sync {
    /// Encrypt `plaintext` into a printable token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Crypto`](crate::error::Error::Crypto) if the
    /// underlying primitive fails.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypt a token produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Crypto`](crate::error::Error::Crypto) for malformed
    /// tokens, a wrong key, tampered ciphertext, or non-UTF-8 plaintext.
    fn decrypt(&self, token: &str) -> Result<String>;
}
