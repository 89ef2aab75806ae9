//! Shared Module
//!
//! This module contains the types that do not depend on the HTTP stack:
//! failure values, error maps, client-visible error responses and server
//! configuration. The backend builds its handlers on top of them.
//!
//! # Overview
//!
//! Failures are created by storage adapters, translated by services, and
//! classified by error maps. Everything here is synchronous and free of I/O.

/// Failure identities and cause chains
pub mod failure;

/// Client-visible error responses
pub mod rest_error;

/// Failure identity to response mapping
pub mod error_map;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use failure::{Failure, FailureKind};
pub use rest_error::RestErr;
pub use error_map::{ErrorMap, ErrorMapping};
pub use error::ErrorMapError;
pub use config::{ServerConfig, ServerConfigBuilder, ConfigError};
