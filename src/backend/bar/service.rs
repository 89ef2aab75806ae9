/**
 * Bar Service
 *
 * This module implements the domain layer for bar entities.
 *
 * # Translate or Pass Through
 *
 * - `BarNotFound` from storage is replaced by `BarUnavailable`, which better
 *   describes the situation to callers. The storage failure stays in the chain.
 * - Any other storage failure is wrapped with context and keeps its identity.
 *   It will not be found in an error map and is masked as a generic error.
 */

use crate::backend::bar::handler::BarService;
use crate::shared::{Failure, FailureKind};

/// Storage port required by the bar service
pub trait BarRepository: Send + Sync {
    fn fetch(&self) -> Result<(), Failure>;
}

/// Domain service for bar entities
#[derive(Clone, Debug)]
pub struct Service<R> {
    repo: R,
}

impl<R: BarRepository> Service<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: BarRepository> BarService for Service<R> {
    fn fetch(&self) -> Result<(), Failure> {
        match self.repo.fetch() {
            Ok(()) => Ok(()),
            Err(e) if e.is(FailureKind::BarNotFound) => {
                Err(e.translate(FailureKind::BarUnavailable, "could not fetch bar"))
            }
            Err(e) => Err(e.wrap("could not fetch bar from repo")),
        }
    }
}
