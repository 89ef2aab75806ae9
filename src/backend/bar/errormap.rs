//! Bar Error Map
//!
//! The mapping between bar service failures and the JSON errors sent back by
//! the REST API.
//!
//! No bar failure is mapped: every bar failure, including `BarUnavailable`,
//! reaches the client as a 500 without details.

use crate::shared::ErrorMapping;

pub static ERROR_MAPPINGS: &[ErrorMapping] = &[];
