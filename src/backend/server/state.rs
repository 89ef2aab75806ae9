/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds one fully wired handler per resource. Handlers own their
 * service and error handler behind `Arc`s; error maps are immutable, so the
 * state is shared across requests without locks.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow each route to extract only its own
 * handler, e.g. `State(handler): State<FooHandler>`.
 */

use axum::extract::FromRef;
use crate::backend::bar::BarHandler;
use crate::backend::foo::FooHandler;

/// Application state shared by all routes
#[derive(Clone)]
pub struct AppState {
    /// Handler serving `GET /foo`
    pub foo: FooHandler,
    /// Handler serving `GET /bar`
    pub bar: BarHandler,
}

impl FromRef<AppState> for FooHandler {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.foo.clone()
    }
}

impl FromRef<AppState> for BarHandler {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.bar.clone()
    }
}
