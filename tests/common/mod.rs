//! Common test utilities and helpers
//!
//! Builders for wired application state, plus stub storage adapters that
//! return a chosen failure.

#![allow(dead_code)]

use std::sync::Arc;

use resterr_demo::backend::bar::{self, BarHandler, BarRepository};
use resterr_demo::backend::foo::{self, FooHandler, FooRepository};
use resterr_demo::backend::server::AppState;
use resterr_demo::backend::RestErrorHandler;
use resterr_demo::shared::{ErrorMap, ErrorMapping, Failure, FailureKind};

/// Storage adapter returning a fixed result
#[derive(Clone)]
pub struct StubRepo {
    pub fails_with: Option<FailureKind>,
}

impl StubRepo {
    pub fn failing(kind: FailureKind) -> Self {
        Self { fails_with: Some(kind) }
    }

    pub fn ok() -> Self {
        Self { fails_with: None }
    }

    fn result(&self) -> Result<(), Failure> {
        self.fails_with.map_or(Ok(()), |kind| Err(Failure::new(kind)))
    }
}

impl FooRepository for StubRepo {
    fn fetch(&self) -> Result<(), Failure> {
        self.result()
    }
}

impl BarRepository for StubRepo {
    fn fetch(&self) -> Result<(), Failure> {
        self.result()
    }
}

/// Error map used by scenarios that map the bar service's translated identity
pub static BAR_UNAVAILABLE_MAPPINGS: &[ErrorMapping] = &[ErrorMapping::new(
    FailureKind::BarUnavailable,
    418,
    "could not perform the get bar operation",
)];

/// State with the production foo wiring and a bar resource using `bar_mappings`
pub fn state_with_bar_map(bar_repo: StubRepo, bar_mappings: &[ErrorMapping]) -> AppState {
    let foo_errors = ErrorMap::from_mappings(foo::errormap::ERROR_MAPPINGS).unwrap();
    let bar_errors = ErrorMap::from_mappings(bar_mappings).unwrap();

    AppState {
        foo: FooHandler::new(
            Arc::new(foo::Service::new(foo::repository::Postgres::new())),
            Arc::new(RestErrorHandler::new(foo_errors)),
        ),
        bar: BarHandler::new(
            Arc::new(bar::Service::new(bar_repo)),
            Arc::new(RestErrorHandler::new(bar_errors)),
        ),
    }
}
