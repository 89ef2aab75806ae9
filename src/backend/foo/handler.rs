/**
 * Foo HTTP Handler
 *
 * This module implements `GET /foo`. The handler calls the foo service once
 * per request. On failure it adds handler context and hands the failure to the
 * error handler; on success it answers `200 OK` with an empty body.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use crate::backend::error::ErrorHandler;
use crate::backend::middleware::RequestContext;
use crate::shared::Failure;

/// Service port required by the foo handler
pub trait FooService: Send + Sync {
    fn fetch(&self) -> Result<(), Failure>;
}

/// HTTP handler for the foo resource
#[derive(Clone)]
pub struct FooHandler {
    service: Arc<dyn FooService>,
    errors: Arc<dyn ErrorHandler>,
}

impl FooHandler {
    pub fn new(service: Arc<dyn FooService>, errors: Arc<dyn ErrorHandler>) -> Self {
        Self { service, errors }
    }

    /// Handle a request for a foo resource
    pub fn get(&self, ctx: &RequestContext) -> Response {
        if let Err(e) = self.service.fetch() {
            return self.errors.handle(ctx, e.wrap("could not get foo from service"));
        }
        tracing::debug!(request_id = %ctx.request_id, "Fetched foo");
        StatusCode::OK.into_response()
    }
}

/// `GET /foo`
pub async fn get_foo(State(handler): State<FooHandler>, ctx: RequestContext) -> Response {
    handler.get(&ctx)
}
