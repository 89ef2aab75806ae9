/**
 * Bar Storage Adapter
 *
 * This module carries the connection to the bar storage. No real I/O happens
 * here: the adapter simulates a missing record and reports it with the
 * `BarNotFound` identity declared by the bar domain.
 */

use crate::backend::bar::service::BarRepository;
use crate::shared::{Failure, FailureKind};

/// Bar storage backed by PostgreSQL
#[derive(Clone, Debug)]
pub struct Postgres {
    simulated: Option<FailureKind>,
}

impl Postgres {
    /// Create a storage adapter whose fetches find no record
    pub fn new() -> Self {
        Self {
            simulated: Some(FailureKind::BarNotFound),
        }
    }

    /// Create a storage adapter whose fetches succeed
    pub fn healthy() -> Self {
        Self { simulated: None }
    }
}

impl Default for Postgres {
    fn default() -> Self {
        Self::new()
    }
}

impl BarRepository for Postgres {
    fn fetch(&self) -> Result<(), Failure> {
        self.simulated.map_or(Ok(()), |kind| Err(Failure::new(kind)))
    }
}
