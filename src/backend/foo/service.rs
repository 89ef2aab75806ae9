/**
 * Foo Service
 *
 * This module implements the domain layer for foo entities. Every storage
 * failure is translated into `FooGetFailed`, the only foo failure the
 * transport layer knows about. The storage failure stays in the chain as the
 * cause, for logging.
 */

use crate::backend::foo::handler::FooService;
use crate::shared::{Failure, FailureKind};

/// Storage port required by the foo service
pub trait FooRepository: Send + Sync {
    fn fetch(&self) -> Result<(), Failure>;
}

/// Domain service for foo entities
#[derive(Clone, Debug)]
pub struct Service<R> {
    repo: R,
}

impl<R: FooRepository> Service<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: FooRepository> FooService for Service<R> {
    /// Fetch a foo entity from the storage layer
    fn fetch(&self) -> Result<(), Failure> {
        self.repo
            .fetch()
            .map_err(|e| e.translate(FailureKind::FooGetFailed, "could not fetch foo from repo"))
    }
}
