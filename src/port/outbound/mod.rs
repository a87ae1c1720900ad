//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two external services the application
//! delegates to: text completion and symmetric encryption.

pub mod cipher;
pub mod llm;
