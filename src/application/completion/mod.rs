//! Completion client: one prompt in, non-empty text out, with bounded retry.

pub mod client;
pub mod config;
