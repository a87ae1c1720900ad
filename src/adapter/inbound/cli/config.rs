//! Configuration loading for CLI commands.

use std::io::ErrorKind;
use std::path::Path;

use miette::IntoDiagnostic;

use super::command::DEFAULT_CONFIG;
use super::diagnostic::config_report;
use crate::infrastructure::config::settings::Config;

/// Load configuration for a command.
///
/// An explicit path must exist. Without one, `config.toml` is used when
/// present and defaults otherwise. Environment overrides apply either way.
pub fn load_config(path: Option<&Path>) -> miette::Result<Config> {
    let (name, content) = match path {
        Some(path) => (
            path.display().to_string(),
            std::fs::read_to_string(path)
                .map_err(|e| miette::miette!("failed to read {}: {e}", path.display()))?,
        ),
        None => match std::fs::read_to_string(DEFAULT_CONFIG) {
            Ok(content) => (DEFAULT_CONFIG.to_string(), content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                (DEFAULT_CONFIG.to_string(), String::new())
            }
            Err(e) => return Err(e).into_diagnostic(),
        },
    };

    Config::parse_toml(&content).map_err(|err| config_report(err, &name, &content))
}
