//! Error Maps
//!
//! An error map translates failure identities into client-visible
//! [`RestErr`] responses. Each resource declares its mappings statically and
//! builds an [`ErrorMap`] once at startup; the map is read-only from then on.
//!
//! # Lookup
//!
//! Lookup walks the failure's cause chain, outermost link first, and returns the
//! entry of the first identity found in the map. A failure with no mapped
//! identity anywhere in its chain is classified as the generic
//! `{500, "something went wrong"}` response.
//!
//! # Example
//!
//! ```rust
//! use resterr_demo::shared::error_map::{ErrorMap, ErrorMapping};
//! use resterr_demo::shared::failure::{Failure, FailureKind};
//!
//! static MAPPINGS: &[ErrorMapping] = &[ErrorMapping::new(
//!     FailureKind::BarUnavailable,
//!     503,
//!     "bar is resting",
//! )];
//!
//! let map = ErrorMap::from_mappings(MAPPINGS).unwrap();
//! let failure = Failure::new(FailureKind::BarNotFound)
//!     .translate(FailureKind::BarUnavailable, "could not fetch bar");
//!
//! assert_eq!(map.classify(&failure).status, 503);
//! assert!(map.classify(&Failure::new(FailureKind::BarNotFound)).is_internal());
//! ```

use std::collections::HashMap;

use crate::shared::error::ErrorMapError;
use crate::shared::failure::{Failure, FailureKind};
use crate::shared::rest_error::RestErr;

/// Static declaration of a single mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMapping {
    pub kind: FailureKind,
    pub status: u16,
    pub message: &'static str,
}

impl ErrorMapping {
    pub const fn new(kind: FailureKind, status: u16, message: &'static str) -> Self {
        Self {
            kind,
            status,
            message,
        }
    }
}

/// Immutable mapping from failure identity to client response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: HashMap<FailureKind, RestErr>,
}

impl ErrorMap {
    /// A map with no entries: every failure is masked
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a map from static declarations
    ///
    /// # Errors
    ///
    /// - `InvalidStatus` if a status is not in `400..=599`
    /// - `EmptyMessage` if a message is blank
    /// - `DuplicateKind` if an identity is declared twice
    pub fn from_mappings(mappings: &[ErrorMapping]) -> Result<Self, ErrorMapError> {
        let mut entries = HashMap::with_capacity(mappings.len());

        for mapping in mappings {
            if !(400..=599).contains(&mapping.status) {
                return Err(ErrorMapError::invalid_status(mapping.kind, mapping.status));
            }
            if mapping.message.trim().is_empty() {
                return Err(ErrorMapError::empty_message(mapping.kind));
            }
            let entry = RestErr::new(mapping.status, mapping.message);
            if entries.insert(mapping.kind, entry).is_some() {
                return Err(ErrorMapError::duplicate_kind(mapping.kind));
            }
        }

        Ok(Self { entries })
    }

    /// Find the entry for the first mapped identity in the failure's chain
    pub fn lookup(&self, failure: &Failure) -> Option<&RestErr> {
        failure.kinds().find_map(|kind| self.entries.get(&kind))
    }

    /// Classify a failure into the response the client will see
    pub fn classify(&self, failure: &Failure) -> RestErr {
        self.lookup(failure).cloned().unwrap_or_else(RestErr::internal)
    }

    pub fn contains(&self, kind: FailureKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    static MAPPINGS: &[ErrorMapping] = &[
        ErrorMapping::new(FailureKind::FooGetFailed, 418, "could not perform the get foo operation"),
        ErrorMapping::new(FailureKind::BarNotFound, 404, "no bar here"),
    ];

    fn map() -> ErrorMap {
        ErrorMap::from_mappings(MAPPINGS).unwrap()
    }

    #[test]
    fn test_mapped_identity() {
        let got = map().classify(&Failure::new(FailureKind::FooGetFailed));
        assert_eq!(got, RestErr::new(418, "could not perform the get foo operation"));
    }

    #[test]
    fn test_unmapped_identity_is_masked() {
        let failure = Failure::new(FailureKind::FooNetworkDown).wrap("could not fetch foo");
        assert_eq!(map().classify(&failure), RestErr::internal());
        assert!(map().lookup(&failure).is_none());
    }

    #[test]
    fn test_match_below_unmapped_link() {
        // unmapped identity wrapping a mapped one
        let failure = Failure::new(FailureKind::BarNotFound)
            .translate(FailureKind::BarUnavailable, "could not fetch bar")
            .wrap("could not get bar from service");
        assert_eq!(map().classify(&failure), RestErr::new(404, "no bar here"));
    }

    #[test]
    fn test_outermost_match_wins() {
        let failure = Failure::new(FailureKind::BarNotFound)
            .translate(FailureKind::FooGetFailed, "translated");
        assert_eq!(map().classify(&failure).status, 418);
    }

    #[test]
    fn test_empty_map_masks_everything() {
        let map = ErrorMap::from_mappings(&[]).unwrap();
        assert!(map.is_empty());
        for kind in FailureKind::ALL {
            assert!(map.classify(&Failure::new(kind)).is_internal());
        }
    }

    #[test]
    fn test_rejects_non_error_status() {
        let got = ErrorMap::from_mappings(&[ErrorMapping::new(FailureKind::FooGetFailed, 200, "ok")]);
        assert_eq!(got, Err(ErrorMapError::invalid_status(FailureKind::FooGetFailed, 200)));

        let got = ErrorMap::from_mappings(&[ErrorMapping::new(FailureKind::FooGetFailed, 600, "?")]);
        assert_matches!(got, Err(ErrorMapError::InvalidStatus { status: 600, .. }));
    }

    #[test]
    fn test_rejects_blank_message() {
        let got = ErrorMap::from_mappings(&[ErrorMapping::new(FailureKind::BarUnavailable, 503, "  ")]);
        assert_eq!(got, Err(ErrorMapError::empty_message(FailureKind::BarUnavailable)));
    }

    #[test]
    fn test_rejects_duplicate_identity() {
        let got = ErrorMap::from_mappings(&[
            ErrorMapping::new(FailureKind::BarUnavailable, 503, "first"),
            ErrorMapping::new(FailureKind::BarUnavailable, 500, "second"),
        ]);
        assert_eq!(got, Err(ErrorMapError::duplicate_kind(FailureKind::BarUnavailable)));
    }

    #[test]
    fn test_classification_does_not_mutate() {
        let map = map();
        let before = map.clone();
        let failure = Failure::new(FailureKind::FooGetFailed).wrap("ctx");
        let first = map.classify(&failure);
        let second = map.classify(&failure);
        assert_eq!(first, second);
        assert_eq!(map, before);
        assert_eq!(map.len(), 2);
        assert!(map.contains(FailureKind::BarNotFound));
    }
}
