//! Application configuration.
//!
//! Values come from environment variables (a `.env` file is loaded first by
//! the binary):
//!
//! - `HOST`: listen address (default `0.0.0.0`)
//! - `PORT`: listen port (default `5000`)
//! - `BUFFER_SIZE`: part and ailment slots per monster (default `50`, must be
//!   greater than zero)
//!
//! Unset or empty variables fall back to their defaults; present but invalid
//! values are errors.

use std::env;
use std::str::FromStr;

use mhwsync_domain::monster::DEFAULT_BUFFER_SIZE;
use thiserror::Error;

/// Port the tracker listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

// =============================================================================
// ConfigError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    #[must_use]
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// ServerConfig
// =============================================================================

/// Listen address of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port`, as handed to the listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", DEFAULT_PORT)
    }
}

// =============================================================================
// TrackerConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub buffer_size: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,

    pub tracker: TrackerConfig,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set to a value
    /// that does not parse or is out of bounds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = read(&lookup, "HOST").unwrap_or(defaults.server.host);
        let port = parse(&lookup, "PORT")?.unwrap_or(defaults.server.port);
        let buffer_size = parse::<usize>(&lookup, "BUFFER_SIZE")?
            .unwrap_or(defaults.tracker.buffer_size);

        if buffer_size == 0 {
            return Err(ConfigError::invalid_value(
                "BUFFER_SIZE",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            server: ServerConfig::new(host, port),
            tracker: TrackerConfig { buffer_size },
        })
    }
}

fn read(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    read(lookup, key)
        .map(|value| {
            value
                .parse()
                .map_err(|error| ConfigError::invalid_value(key, format!("'{value}' ({error})")))
        })
        .transpose()
}

// =============================================================================
// Tests
// =============================================================================
