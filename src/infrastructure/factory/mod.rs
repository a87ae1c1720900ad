//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured adapters
//! from application configuration.
//!
//! # Submodules
//!
//! - [`cipher`] - Note cipher construction
//! - [`llm`] - LLM client construction

pub mod cipher;
pub mod llm;
