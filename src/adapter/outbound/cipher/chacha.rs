//! ChaCha20-Poly1305 note cipher.
//!
//! Tokens are URL-safe base64 of `version || nonce || ciphertext+tag`.
//! Every encryption draws a fresh random 96-bit nonce, so encrypting the
//! same text twice yields different tokens.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, Nonce};

use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::cipher::Cipher;

/// Token format version byte.
const VERSION: u8 = 0x01;

/// Nonce length for ChaCha20-Poly1305.
const NONCE_LEN: usize = 12;

/// Poly1305 tag length.
const TAG_LEN: usize = 16;

/// Key length in bytes.
const KEY_LEN: usize = 32;

/// Authenticated cipher for note text.
pub struct ChaChaCipher {
    cipher: ChaCha20Poly1305,
}

impl ChaChaCipher {
    /// Build a cipher from a base64 key string (URL-safe or standard
    /// alphabet) encoding exactly 32 bytes. Fernet keys qualify, but
    /// tokens previously issued by Fernet will not decrypt.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for `ENCRYPTION_KEY` if the
    /// key does not decode or has the wrong length.
    pub fn from_key_str(key: &str) -> Result<Self> {
        let key = key.trim();
        let bytes = URL_SAFE
            .decode(key)
            .or_else(|_| STANDARD.decode(key))
            .map_err(|e| invalid_key(format!("not valid base64: {e}")))?;

        if bytes.len() != KEY_LEN {
            return Err(invalid_key(format!(
                "expected {KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let cipher = ChaCha20Poly1305::new_from_slice(&bytes)
            .map_err(|e| invalid_key(e.to_string()))?;
        Ok(Self { cipher })
    }

    /// Build a cipher with a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        let key = ChaCha20Poly1305::generate_key(&mut OsRng);
        Self {
            cipher: ChaCha20Poly1305::new(&key),
        }
    }

    /// A fresh random key, encoded for the `ENCRYPTION_KEY` variable.
    #[must_use]
    pub fn generate_key_string() -> String {
        URL_SAFE.encode(ChaCha20Poly1305::generate_key(&mut OsRng))
    }
}

fn invalid_key(reason: String) -> Error {
    ConfigError::InvalidValue {
        field: "ENCRYPTION_KEY",
        reason,
    }
    .into()
}

impl Cipher for ChaChaCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| Error::Crypto(format!("encryption failed: {e}")))?;

        let mut token = Vec::with_capacity(1 + NONCE_LEN + ciphertext.len());
        token.push(VERSION);
        token.extend_from_slice(&nonce);
        token.extend_from_slice(&ciphertext);
        Ok(URL_SAFE.encode(token))
    }

    fn decrypt(&self, token: &str) -> Result<String> {
        let bytes = URL_SAFE
            .decode(token.trim())
            .map_err(|_| Error::Crypto("invalid token encoding".into()))?;

        if bytes.len() < 1 + NONCE_LEN + TAG_LEN {
            return Err(Error::Crypto("invalid token: too short".into()));
        }
        if bytes[0] != VERSION {
            return Err(Error::Crypto(format!(
                "unsupported token version: {}",
                bytes[0]
            )));
        }

        let (nonce, ciphertext) = bytes[1..].split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| Error::Crypto("invalid token: authentication failed".into()))?;

        String::from_utf8(plaintext)
            .map_err(|_| Error::Crypto("decrypted data is not valid UTF-8".into()))
    }
}
