//! Web configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `QUESTION_DESK_HOST` - Bind address (default: 127.0.0.1)
//! - `QUESTION_DESK_PORT` - Listen port (default: 3000)
//! - `QUESTION_DESK_SEED_COUNT` - Size of the synthetic dataset generated
//!   at startup (default: 50)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Number of synthetic questions to seed the store with
    pub seed_count: u32,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or_default("QUESTION_DESK_HOST", "127.0.0.1")?;
        let port = parse_env_or_default("QUESTION_DESK_PORT", "3000")?;
        let seed_count = parse_env_or_default("QUESTION_DESK_SEED_COUNT", "50")?;

        Ok(Self {
            host,
            port,
            seed_count,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read an environment variable, falling back to `default`, and parse it.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
