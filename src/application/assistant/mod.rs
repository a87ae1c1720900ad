//! Note assistant application services.
//!
//! Builds task prompts, runs them through the completion client, and turns
//! model output back into typed results.

pub mod config;
pub mod extract;
pub mod markup;
pub mod prompt;
pub mod service;
