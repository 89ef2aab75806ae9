//! Shared Error Types
//!
//! This module defines the errors raised while building error maps from their
//! static declarations. They are startup errors: once a map is built, request
//! handling never produces them.
//!
//! # Error Categories
//!
//! - `InvalidStatus` - A mapping declares a status that is not an error status
//! - `EmptyMessage` - A mapping declares a blank user-facing message
//! - `DuplicateKind` - A failure identity is declared more than once
//!
//! # Usage
//!
//! ```rust
//! use resterr_demo::shared::error::ErrorMapError;
//! use resterr_demo::shared::failure::FailureKind;
//!
//! let error = ErrorMapError::invalid_status(FailureKind::FooGetFailed, 200);
//! assert!(error.to_string().contains("200"));
//! ```

use thiserror::Error;

use crate::shared::failure::FailureKind;

/// Errors raised while building an error map
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorMapError {
    /// The declared status is outside the 4xx/5xx range
    #[error("invalid status {status} for {kind:?}: expected a client or server error status")]
    InvalidStatus {
        /// The identity whose mapping is invalid
        kind: FailureKind,
        /// The offending status code
        status: u16,
    },

    /// The declared message is blank
    #[error("empty message for {kind:?}")]
    EmptyMessage {
        /// The identity whose mapping is invalid
        kind: FailureKind,
    },

    /// The same identity is declared twice
    #[error("{kind:?} is mapped more than once")]
    DuplicateKind {
        /// The duplicated identity
        kind: FailureKind,
    },
}

impl ErrorMapError {
    /// Create a new invalid status error
    pub fn invalid_status(kind: FailureKind, status: u16) -> Self {
        Self::InvalidStatus { kind, status }
    }

    /// Create a new empty message error
    pub fn empty_message(kind: FailureKind) -> Self {
        Self::EmptyMessage { kind }
    }

    /// Create a new duplicate identity error
    pub fn duplicate_kind(kind: FailureKind) -> Self {
        Self::DuplicateKind { kind }
    }
}
