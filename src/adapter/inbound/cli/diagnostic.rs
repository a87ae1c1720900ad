//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration parse errors render with the offending file excerpt and a
//! labeled span.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError as CoreConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(notez::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error for the file `name` with `src` content.
    #[must_use]
    pub fn new(message: impl Into<String>, name: &str, src: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: None,
            help: None,
        }
    }

    /// Point the error at `len` bytes starting at `offset`.
    #[must_use]
    pub fn with_span(mut self, offset: usize, len: usize) -> Self {
        self.span = Some((offset, len).into());
        self
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Render a configuration failure for the file `name` as a diagnostic.
///
/// TOML syntax errors carry their span; validation errors point at the
/// whole file with a hint.
pub fn config_report(err: Error, name: &str, src: &str) -> miette::Report {
    let message = err.to_string();
    match err {
        Error::Config(CoreConfigError::Parse(parse)) => {
            let mut diagnostic =
                ConfigError::new(format!("invalid TOML: {}", parse.message()), name, src);
            if let Some(span) = parse.span() {
                diagnostic = diagnostic.with_span(span.start, span.len().max(1));
            }
            miette::Report::new(diagnostic)
        }
        Error::Config(
            CoreConfigError::InvalidValue { field, .. } | CoreConfigError::MissingField { field },
        ) => miette::Report::new(
            ConfigError::new(message, name, src)
                .with_help(format!("check the `{field}` setting or its environment override")),
        ),
        _ => miette::Report::msg(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::settings::Config;

    #[test]
    fn parse_errors_keep_span() {
        let src = "[server]\nport = \"eighty\"\n";
        let err = Config::parse_toml_with_env(src, |_| None).unwrap_err();
        let report = config_report(err, "config.toml", src);
        let diagnostic = report.downcast_ref::<ConfigError>().unwrap();
        assert!(diagnostic.message.starts_with("invalid TOML"));
        assert!(diagnostic.span.is_some());
    }

    #[test]
    fn validation_errors_get_help() {
        let src = "[retry]\nmax_retries = 0\n";
        let err = Config::parse_toml_with_env(src, |_| None).unwrap_err();
        let report = config_report(err, "config.toml", src);
        let diagnostic = report.downcast_ref::<ConfigError>().unwrap();
        assert!(diagnostic.message.contains("max_retries"));
        assert!(diagnostic.help.as_deref().unwrap().contains("max_retries"));
        assert!(diagnostic.span.is_none());
    }
}
