/**
 * Bar HTTP Handler
 *
 * This module implements `GET /bar`. On success it answers
 * `418 I'm a teapot` with an empty body; the success status is independent of
 * how failures are mapped.
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

/// Service port required by the bar handler
pub trait BarService: Send + Sync {
    fn fetch(&self) -> Result<(), Failure>;
}

/// HTTP handler for the bar resource
#[derive(Clone)]
pub struct BarHandler {
    service: Arc<dyn BarService>,
    errors: Arc<dyn ErrorHandler>,
}

impl BarHandler {
    pub fn new(service: Arc<dyn BarService>, errors: Arc<dyn ErrorHandler>) -> Self {
        Self { service, errors }
    }

    /// Handle a request for a bar resource
    pub fn get(&self, ctx: &RequestContext) -> Response {
        match self.service.fetch() {
            Ok(()) => StatusCode::IM_A_TEAPOT.into_response(),
            Err(e) => self.errors.handle(ctx, e.wrap("could not get bar from service")),
        }
    }
}

/// `GET /bar`
pub async fn get_bar(State(handler): State<BarHandler>, ctx: RequestContext) -> Response {
    handler.get(&ctx)
}
