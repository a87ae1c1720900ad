//! Command-line interface definitions.
//!
//! Defines the CLI structure for the notez service using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Note assistant and vault backend
#[derive(Parser, Debug)]
#[command(name = "notez")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the notez CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve(ServeArgs),

    /// Print a fresh encryption key for ENCRYPTION_KEY
    Keygen,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `notez config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate a configuration file and report the effective settings.
    Check(ConfigPathArg),
}

/// Shared argument struct for commands that only take a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file [default: config.toml, optional]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to the configuration file [default: config.toml, optional]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}
