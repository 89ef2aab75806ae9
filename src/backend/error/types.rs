/**
 * Backend Error Types
 *
 * This module defines the process-level errors of the backend server.
 * They occur while starting, serving or stopping the server, never while
 * handling an individual request: request failures are `Failure` values and
 * are turned into responses by the error handler.
 *
 * # Error Categories
 *
 * ## Startup Errors
 *
 * - Invalid configuration (unparsable address or timeout)
 * - Invalid error map declaration for a resource
 * - Failure to bind the listen address
 *
 * ## Runtime Errors
 *
 * - The server loop failed while accepting connections
 * - In-flight requests did not drain within the shutdown bound
 */

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use crate::shared::{ConfigError, ErrorMapError};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use resterr_demo::backend::error::BackendError;
/// use resterr_demo::shared::{ErrorMapError, FailureKind};
///
/// let err = BackendError::error_map("foo", ErrorMapError::empty_message(FailureKind::FooGetFailed));
/// assert!(err.to_string().contains("foo"));
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A resource declared an invalid error map
    #[error("invalid error map for {resource}: {source}")]
    ErrorMap {
        /// Name of the resource owning the map
        resource: &'static str,
        #[source]
        source: ErrorMapError,
    },

    /// The listen address could not be bound
    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// In-flight requests did not finish in time during shutdown
    #[error("could not shut down server: in-flight requests still running after {0:?}")]
    ShutdownTimeout(Duration),
}

impl BackendError {
    /// Create a new error map error for a resource
    pub fn error_map(resource: &'static str, source: ErrorMapError) -> Self {
        Self::ErrorMap { resource, source }
    }

    /// Create a new bind error
    pub fn bind(addr: SocketAddr, source: std::io::Error) -> Self {
        Self::Bind { addr, source }
    }
}
