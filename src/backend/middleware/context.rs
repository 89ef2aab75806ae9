/**
 * Request Context Middleware
 *
 * This module attaches a `RequestContext` to every request. The context
 * carries a request id used to correlate the failure logged by the error
 * handler with the response the client received.
 *
 * The request id is taken from an incoming `x-request-id` header when it is
 * a valid UUID, and generated otherwise. It is echoed back on the response.
 */

use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use uuid::Uuid;

/// Header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request data handed to resource handlers and the error handler
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: Uuid,
    pub method: Method,
    pub path: String,
}

impl RequestContext {
    /// Build a context from request parts
    pub fn from_parts(parts: &Parts) -> Self {
        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .unwrap_or_else(Uuid::new_v4);

        Self {
            request_id,
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
        }
    }

    /// A context for calls made outside of an HTTP request
    pub fn detached(method: Method, path: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            method,
            path: path.into(),
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            return Ok(ctx.clone());
        }
        Ok(Self::from_parts(parts))
    }
}

/// Request context middleware
///
/// This middleware:
/// 1. Builds the `RequestContext` from the request
/// 2. Stores it in the request extensions for handlers
/// 3. Echoes the request id on the response
pub async fn request_context_middleware(request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();
    let ctx = RequestContext::from_parts(&parts);
    let request_id = ctx.request_id;
    parts.extensions.insert(ctx);

    let mut response = next.run(Request::from_parts(parts, body)).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    fn parts(request_id: Option<&str>) -> Parts {
        let mut builder = HttpRequest::builder().method(Method::GET).uri("/foo?x=1");
        if let Some(id) = request_id {
            builder = builder.header(REQUEST_ID_HEADER, id);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_uses_incoming_request_id() {
        let id = Uuid::new_v4();
        let ctx = RequestContext::from_parts(&parts(Some(&id.to_string())));
        assert_eq!(ctx.request_id, id);
        assert_eq!(ctx.method, Method::GET);
        assert_eq!(ctx.path, "/foo");
    }

    #[test]
    fn test_generates_request_id_for_invalid_header() {
        let ctx = RequestContext::from_parts(&parts(Some("not-a-uuid")));
        assert!(!ctx.request_id.is_nil());

        let first = RequestContext::from_parts(&parts(None));
        let second = RequestContext::from_parts(&parts(None));
        assert_ne!(first.request_id, second.request_id);
    }

    #[tokio::test]
    async fn test_extractor_prefers_extension() {
        let mut parts = parts(None);
        let stored = RequestContext::detached(Method::GET, "/bar");
        parts.extensions.insert(stored.clone());

        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.request_id, stored.request_id);
        assert_eq!(ctx.path, "/bar");
    }
}
