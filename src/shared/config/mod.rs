//! Server configuration module
//!
//! Provides the listen address and the shutdown drain bound of the server.
//! Values come from a builder or from the environment:
//!
//! - `SERVER_ADDR` - socket address to listen on (default `0.0.0.0:8080`)
//! - `SHUTDOWN_TIMEOUT_SECS` - how long in-flight requests may drain (default `10`)

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const ADDR_VAR: &str = "SERVER_ADDR";
pub const SHUTDOWN_TIMEOUT_VAR: &str = "SHUTDOWN_TIMEOUT_SECS";

const DEFAULT_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);
const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub addr: SocketAddr,
    /// Upper bound for draining in-flight requests on shutdown
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load the configuration from environment variables
    ///
    /// Unset variables fall back to their defaults; set but unparsable
    /// variables are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(raw) = std::env::var(ADDR_VAR) {
            let addr = raw
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddr(raw.clone()))?;
            builder = builder.addr(addr);
        }

        if let Ok(raw) = std::env::var(SHUTDOWN_TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            builder = builder.shutdown_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shutdown_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    shutdown_timeout: Option<Duration>,
}

impl ServerConfigBuilder {
    /// Set the listen address
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Set the shutdown drain bound
    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = Some(timeout);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let config = ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            shutdown_timeout: self.shutdown_timeout.unwrap_or(defaults.shutdown_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid listen address: {0}")]
    InvalidAddr(String),
    #[error("invalid shutdown timeout: {0}")]
    InvalidTimeout(String),
    #[error("shutdown timeout must be greater than zero")]
    ZeroTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ADDR_VAR);
        std::env::remove_var(SHUTDOWN_TIMEOUT_VAR);
    }

    #[test]
    fn test_builder_defaults() {
        let config = ServerConfig::builder().build().unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.shutdown_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let got = ServerConfig::builder().shutdown_timeout(Duration::ZERO).build();
        assert_eq!(got, Err(ConfigError::ZeroTimeout));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(ServerConfig::from_env().unwrap(), ServerConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(ADDR_VAR, "127.0.0.1:9090");
        std::env::set_var(SHUTDOWN_TIMEOUT_VAR, "3");

        let config = ServerConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.addr, "127.0.0.1:9090".parse().unwrap());
        assert_eq!(config.shutdown_timeout, Duration::from_secs(3));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values() {
        clear_env();
        std::env::set_var(ADDR_VAR, ":8080");
        let got = ServerConfig::from_env();
        clear_env();
        assert_eq!(got, Err(ConfigError::InvalidAddr(":8080".into())));

        std::env::set_var(SHUTDOWN_TIMEOUT_VAR, "soon");
        let got = ServerConfig::from_env();
        clear_env();
        assert_eq!(got, Err(ConfigError::InvalidTimeout("soon".into())));
    }
}
