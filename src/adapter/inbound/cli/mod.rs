//! CLI inbound adapter.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod dispatch;
pub mod keygen;
pub mod output;
pub mod serve;
