//! Handler for the `keygen` command.

use crate::adapter::outbound::cipher::chacha::ChaChaCipher;

/// Print a fresh key suitable for `ENCRYPTION_KEY`.
pub fn execute() {
    println!("{}", ChaChaCipher::generate_key_string());
}
