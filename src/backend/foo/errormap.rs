//! Foo Error Map
//!
//! The mapping between foo service failures and the JSON errors sent back by
//! the REST API. Failures not declared here reach the client as a 500 without
//! details.

use crate::shared::{ErrorMapping, FailureKind};

pub static ERROR_MAPPINGS: &[ErrorMapping] = &[ErrorMapping::new(
    FailureKind::FooGetFailed,
    418,
    "could not perform the get foo operation",
)];
