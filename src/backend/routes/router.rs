/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all resource routes into a single Axum router.
 *
 * # Layers
 *
 * 1. Request context (outermost): assigns the request id
 * 2. Tracing: one span per request
 *
 * # Fallback
 *
 * Unknown routes answer with a JSON `404`, and known routes called with the
 * wrong method with a JSON `405`, in the same format as mapped failures.
 */

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::backend::bar::get_bar;
use crate::backend::foo::get_foo;
use crate::backend::middleware::request_context_middleware;
use crate::backend::server::state::AppState;
use crate::shared::RestErr;

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// - `GET /foo` - Fetch a foo resource (`200` on success)
/// - `GET /bar` - Fetch a bar resource (`418` on success)
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/foo", get(get_foo))
        .route("/bar", get(get_bar))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_context_middleware))
        .with_state(app_state)
}

async fn not_found() -> RestErr {
    RestErr::new(404, "not found")
}

async fn method_not_allowed() -> RestErr {
    RestErr::new(405, "method not allowed")
}
