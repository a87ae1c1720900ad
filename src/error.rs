use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("completion service returned an empty response")]
    EmptyResponse,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("completion failed after {attempts} attempt(s): {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    #[error("cryptographic error: {0}")]
    Crypto(String),
}

impl Error {
    /// Whether retrying the same call could plausibly succeed.
    ///
    /// Network faults, non-success statuses, and empty completions are
    /// transient. Configuration, validation, and cryptographic failures
    /// are not: repeating them yields the same outcome.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Connection(_) | Error::EmptyResponse | Error::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_not_transient() {
        let err: Error = ConfigError::MissingField {
            field: "GROQ_API_KEY",
        }
        .into();
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "missing required field: GROQ_API_KEY");
    }

    #[test]
    fn empty_response_and_connection_are_transient() {
        assert!(Error::EmptyResponse.is_transient());
        assert!(Error::Connection("503".into()).is_transient());
        assert!(!Error::Crypto("bad tag".into()).is_transient());
        assert!(!Error::InvalidRequest("empty prompt".into()).is_transient());
    }

    #[test]
    fn retries_exhausted_reports_attempts_and_cause() {
        let err = Error::RetriesExhausted {
            attempts: 2,
            source: Box::new(Error::EmptyResponse),
        };
        let msg = err.to_string();
        assert!(msg.contains("2 attempt(s)"), "{msg}");
        assert!(msg.contains("empty response"), "{msg}");
        assert!(!err.is_transient());
    }
}
