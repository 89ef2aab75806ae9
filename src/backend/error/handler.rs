/**
 * REST Error Handler
 *
 * This module turns any `Failure` into the HTTP response the client sees.
 *
 * # Classification
 *
 * The handler owns the error map of one resource. For every failure it walks
 * the cause chain and looks each identity up in the map:
 *
 * - first mapped identity found: respond with its status and message
 * - nothing mapped: respond with `500 {"status":500,"message":"something went wrong"}`
 *
 * The decision is made on identities only. The failure's text is logged,
 * together with the request id, and never sent to the client.
 */

use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use crate::backend::middleware::RequestContext;
use crate::shared::{ErrorMap, Failure};

/// Capability that renders a failure as the response to the current request
///
/// Implementations produce exactly one response per call.
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, ctx: &RequestContext, failure: Failure) -> Response;
}

/// Error handler backed by an immutable error map
#[derive(Clone, Debug)]
pub struct RestErrorHandler {
    map: Arc<ErrorMap>,
}

impl RestErrorHandler {
    /// Create a handler owning the given map
    ///
    /// An empty map is accepted and masks every failure.
    pub fn new(map: ErrorMap) -> Self {
        Self { map: Arc::new(map) }
    }

    pub fn map(&self) -> &ErrorMap {
        &self.map
    }
}

impl ErrorHandler for RestErrorHandler {
    fn handle(&self, ctx: &RequestContext, failure: Failure) -> Response {
        match self.map.lookup(&failure) {
            Some(rest_err) => {
                tracing::warn!(
                    request_id = %ctx.request_id,
                    method = %ctx.method,
                    path = %ctx.path,
                    status = rest_err.status,
                    error = %failure,
                    "Request failed with a mapped error"
                );
                rest_err.clone().into_response()
            }
            None => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    method = %ctx.method,
                    path = %ctx.path,
                    error = %failure,
                    "Request failed with an unmapped error"
                );
                crate::shared::RestErr::internal().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};
    use crate::shared::{ErrorMapping, FailureKind, RestErr};

    static MAPPINGS: &[ErrorMapping] = &[ErrorMapping::new(
        FailureKind::FooGetFailed,
        418,
        "could not perform the get foo operation",
    )];

    fn handler() -> RestErrorHandler {
        RestErrorHandler::new(ErrorMap::from_mappings(MAPPINGS).unwrap())
    }

    async fn decode(response: Response) -> (StatusCode, RestErr) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ctx() -> RequestContext {
        RequestContext::detached(Method::GET, "/foo")
    }

    #[tokio::test]
    async fn test_unmapped_failure_is_internal_server_error() {
        let failure = Failure::new(FailureKind::FooNetworkDown).wrap("could not fetch foo from repo");
        let (status, body) = decode(handler().handle(&ctx(), failure)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, RestErr::internal());
    }

    #[tokio::test]
    async fn test_mapped_failure_uses_map_entry() {
        let failure = Failure::new(FailureKind::FooNetworkDown)
            .translate(FailureKind::FooGetFailed, "could not fetch foo from repo")
            .wrap("could not get foo from service");
        let (status, body) = decode(handler().handle(&ctx(), failure)).await;

        assert_eq!(status, StatusCode::IM_A_TEAPOT);
        assert_eq!(body, RestErr::new(418, "could not perform the get foo operation"));
    }

    #[tokio::test]
    async fn test_failure_text_never_reaches_client() {
        let failure = Failure::new(FailureKind::BarNotFound).wrap("secret table users_v2 is gone");
        let response = handler().handle(&ctx(), failure);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(!text.contains("secret"));
        assert!(!text.contains("bar not found"));
    }

    #[tokio::test]
    async fn test_empty_map_masks_everything() {
        let handler = RestErrorHandler::new(ErrorMap::empty());
        assert!(handler.map().is_empty());

        let (status, body) = decode(handler.handle(&ctx(), Failure::new(FailureKind::FooGetFailed))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, RestErr::internal());
    }
}
