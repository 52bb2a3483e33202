//! Server configuration loaded from the environment.

use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

/// Environment variable holding the listen address
pub const BIND_ENV: &str = "HANGMAN_BIND";

/// Listen address used when the variable is unset
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid HANGMAN_BIND value {value:?}: {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if `HANGMAN_BIND` is set but is not a socket address
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_bind(std::env::var(BIND_ENV).ok())
    }

    fn from_bind(value: Option<String>) -> Result<Self, ConfigError> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let bind = value
            .parse()
            .map_err(|source| ConfigError::InvalidBind { value, source })?;

        Ok(Self { bind })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}
