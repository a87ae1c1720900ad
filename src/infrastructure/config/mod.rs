//! Infrastructure configuration modules.

pub mod llm;
pub mod logging;
pub mod server;
pub mod settings;
