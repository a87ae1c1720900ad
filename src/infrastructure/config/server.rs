//! HTTP server configuration.

use axum::http::HeaderValue;
use serde::Deserialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::error::{ConfigError, Result};

/// Listener and CORS settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind. Defaults to "0.0.0.0".
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind. Defaults to 8000; `PORT` overrides it.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS. `"*"` allows any origin.
    ///
    /// `ALLOWED_ORIGINS` (comma separated) overrides this list.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// `host:port` string for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Build the CORS layer for the configured origins.
    ///
    /// Credentials are only allowed with an explicit origin list; browsers
    /// reject credentialed responses for a wildcard origin.
    ///
    /// # Errors
    ///
    /// Returns an error if an origin is not a valid header value.
    #[allow(clippy::result_large_err)]
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        if self.allows_any_origin() {
            return Ok(CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any));
        }

        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                    field: "allowed_origins",
                    reason: format!("{origin:?}: {e}"),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

const fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}
