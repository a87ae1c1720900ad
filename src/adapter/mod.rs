//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: HTTP API and CLI
//! - [`outbound`] - Driven side: LLM provider and note cipher

pub mod inbound;
pub mod outbound;
