//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!  HTTP ──▶ adapter::inbound::http ──▶ application ──▶ port::outbound::llm ────▶ provider
//!                                      (assistant,     port::outbound::cipher
//!                                       vault)
//! ```

pub mod outbound;
