//! Notez - note assistant and vault backend.
//!
//! An HTTP service that runs note-taking helpers (glossary, summary, tags,
//! grammar correction, translation) through an OpenAI-compatible LLM API,
//! and encrypts or decrypts note text with a symmetric key.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Request-scoped types: tasks, completion requests, results
//! - [`port`] - Traits for the provider ([`port::outbound::llm::Llm`]) and
//!   cipher ([`port::outbound::cipher::Cipher`])
//! - [`application`] - Completion client with bounded retry, note assistant
//!   service, note vault
//! - [`adapter`] - axum HTTP API, clap CLI, OpenAI-compatible provider,
//!   ChaCha20-Poly1305 cipher
//! - [`infrastructure`] - Configuration, logging, and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Expose fakes for integration tests
//! - `integration-tests` - Enable tests that call the real provider
//!
//! # Example
//!
//! ```no_run
//! use notez::adapter::inbound::http::router::create_router;
//! use notez::infrastructure::bootstrap::build_app_state;
//! use notez::infrastructure::config::settings::Config;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("config.toml")?;
//! let app = create_router(build_app_state(&config)?, config.server.cors_layer()?);
//! let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
