//! Client-Visible Error Responses
//!
//! [`RestErr`] is the only data ever serialized to a client when a request
//! fails. It is produced by an error map from the identity of a failure.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "status": 418,
//!   "message": "could not perform the get foo operation"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Status code used for every failure that has no mapping
pub const INTERNAL_STATUS: u16 = 500;

/// Message used for every failure that has no mapping
pub const INTERNAL_MESSAGE: &str = "something went wrong";

/// Status and message sent back to the client for a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestErr {
    /// HTTP status code of the response
    pub status: u16,
    /// User-facing message
    pub message: String,
}

impl RestErr {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The generic response that masks every unmapped failure
    pub fn internal() -> Self {
        Self::new(INTERNAL_STATUS, INTERNAL_MESSAGE)
    }

    /// Whether this is the generic masked response
    pub fn is_internal(&self) -> bool {
        self.status == INTERNAL_STATUS && self.message == INTERNAL_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal() {
        let err = RestErr::internal();
        assert_eq!(err.status, 500);
        assert_eq!(err.message, "something went wrong");
        assert!(err.is_internal());
        assert!(!RestErr::new(500, "database exploded").is_internal());
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(RestErr::new(418, "teapot")).unwrap();
        assert_eq!(json, serde_json::json!({ "status": 418, "message": "teapot" }));
    }
}
