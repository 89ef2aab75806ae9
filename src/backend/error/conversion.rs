/**
 * Error Conversion
 *
 * This module converts client-visible error responses into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "status": 418,
 *   "message": "could not perform the get foo operation"
 * }
 * ```
 */

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use crate::shared::RestErr;

impl IntoResponse for RestErr {
    /// Convert a classified error into an HTTP response
    ///
    /// The response status is the mapped status. Statuses are validated when
    /// the error map is built; anything that still fails to convert is sent
    /// as the generic internal error.
    fn into_response(self) -> Response {
        let Ok(status) = StatusCode::from_u16(self.status) else {
            return RestErr::internal().into_response();
        };

        match serde_json::to_vec(&self) {
            Ok(body) => (
                status,
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize error response: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
