//! Failure Values
//!
//! This module defines the failure values that travel from the storage layer,
//! through the business layer, up to the HTTP error handler.
//!
//! # Identity
//!
//! Every known kind of failure has an opaque identity, a [`FailureKind`].
//! Two failures are "the same kind of failure" when their identities are equal,
//! regardless of the text attached to them.
//!
//! # Cause Chains
//!
//! A [`Failure`] is one link of a cause chain. Each layer may:
//!
//! - wrap a failure with context text ([`Failure::wrap`]), keeping its identity
//! - translate a failure into a new identity ([`Failure::translate`]), keeping the
//!   original reachable as the cause
//!
//! The error handler walks the chain link by link and compares identities, so
//! client-visible behaviour never depends on message text.
//!
//! # Usage
//!
//! ```rust
//! use resterr_demo::shared::failure::{Failure, FailureKind};
//!
//! let failure = Failure::new(FailureKind::BarNotFound)
//!     .translate(FailureKind::BarUnavailable, "could not fetch bar")
//!     .wrap("could not get bar from service");
//!
//! assert!(failure.is(FailureKind::BarUnavailable));
//! assert!(failure.is(FailureKind::BarNotFound));
//! assert_eq!(failure.kind(), None);
//! ```

use std::fmt;
use thiserror::Error;

/// Opaque identity of a known failure
///
/// Identities are declared by the domain layer. Storage adapters return
/// them, services translate them, and error maps key on them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureKind {
    /// The foo storage could not reach its backend
    ///
    /// This identity is private to the storage boundary and is never mapped
    /// to a client response.
    #[error("network kaput")]
    FooNetworkDown,

    /// The foo service failed to get a foo entity
    #[error("could not get foo")]
    FooGetFailed,

    /// The bar storage holds no record
    ///
    /// Declared by the bar domain rather than by the storage adapter, so that
    /// storage implementations adapt to the domain and not the other way around.
    #[error("bar not found")]
    BarNotFound,

    /// The bar service cannot currently provide a bar entity
    #[error("bar is unavailable at the moment")]
    BarUnavailable,
}

impl FailureKind {
    /// Every declared identity
    pub const ALL: [FailureKind; 4] = [
        FailureKind::FooNetworkDown,
        FailureKind::FooGetFailed,
        FailureKind::BarNotFound,
        FailureKind::BarUnavailable,
    ];
}

/// One link of a failure cause chain
///
/// A link carries an optional identity, optional context text and an optional
/// cause. Sentinels have an identity and nothing else; wraps have context and a
/// cause but no identity of their own; translations have all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    kind: Option<FailureKind>,
    context: Option<String>,
    cause: Option<Box<Failure>>,
}

impl Failure {
    /// Create a sentinel failure with the given identity
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind: Some(kind),
            context: None,
            cause: None,
        }
    }

    /// Add context text without changing the identity of the chain
    pub fn wrap(self, context: impl Into<String>) -> Self {
        Self {
            kind: None,
            context: Some(context.into()),
            cause: Some(Box::new(self)),
        }
    }

    /// Replace the propagating identity with `kind`
    ///
    /// The original failure stays reachable as the cause, so both identities
    /// remain members of the chain.
    pub fn translate(self, kind: FailureKind, context: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            context: Some(context.into()),
            cause: Some(Box::new(self)),
        }
    }

    /// Identity of this link, `None` for pure context wraps
    pub fn kind(&self) -> Option<FailureKind> {
        self.kind
    }

    /// Context text of this link
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The wrapped failure, if any
    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }

    /// Iterate over the links of the chain, outermost first
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Iterate over the identities present in the chain, outermost first
    pub fn kinds(&self) -> impl Iterator<Item = FailureKind> + '_ {
        self.chain().filter_map(Failure::kind)
    }

    /// Whether this failure is, or wraps, a failure with identity `kind`
    pub fn is(&self, kind: FailureKind) -> bool {
        self.kinds().any(|k| k == kind)
    }

    /// The innermost link of the chain
    pub fn root_cause(&self) -> &Failure {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }
}

impl From<FailureKind> for Failure {
    fn from(kind: FailureKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.context, &self.cause) {
            (Some(kind), Some(context), Some(cause)) => {
                write!(f, "{context} ({cause}): {kind}")
            }
            (_, Some(context), Some(cause)) => write!(f, "{context}: {cause}"),
            (Some(kind), Some(context), None) => write!(f, "{context}: {kind}"),
            (Some(kind), None, _) => write!(f, "{kind}"),
            (None, Some(context), None) => f.write_str(context),
            (None, None, Some(cause)) => write!(f, "{cause}"),
            (None, None, None) => f.write_str("unknown failure"),
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Iterator over the links of a [`Failure`] chain
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
