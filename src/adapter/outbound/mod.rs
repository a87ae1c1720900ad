//! Outbound adapters (driven side).

pub mod cipher;
pub mod llm;
