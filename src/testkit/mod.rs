//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`llm`] - Mock [`Llm`](crate::port::outbound::llm::Llm)
//!   implementations: `MockLlm`, `ScriptedLlm`.
//! - [`cipher`] - Reversible [`Cipher`](crate::port::outbound::cipher::Cipher)
//!   fake: `MockCipher`.
//! - [`config`] - Canonical test configurations (zero-delay retry).

pub mod cipher;
pub mod config;
pub mod llm;
