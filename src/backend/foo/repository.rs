/**
 * Foo Storage Adapter
 *
 * This module carries the connection to the foo storage and the methods to
 * interact with it. No real I/O happens here: the adapter simulates a network
 * failure, which the service must not expose on HTTP responses.
 */

use crate::backend::foo::service::FooRepository;
use crate::shared::{Failure, FailureKind};

/// Foo storage backed by PostgreSQL
#[derive(Clone, Debug)]
pub struct Postgres {
    simulated: Option<FailureKind>,
}

impl Postgres {
    /// Create a storage adapter whose fetches fail with a network failure
    pub fn new() -> Self {
        Self {
            simulated: Some(FailureKind::FooNetworkDown),
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

impl FooRepository for Postgres {
    fn fetch(&self) -> Result<(), Failure> {
        match self.simulated {
            Some(kind) => Err(Failure::new(kind)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_simulates_network_failure() {
        let got = Postgres::new().fetch();
        assert_eq!(got, Err(Failure::new(FailureKind::FooNetworkDown)));
    }

    #[test]
    fn test_healthy_fetch_succeeds() {
        assert_eq!(Postgres::healthy().fetch(), Ok(()));
    }
}
