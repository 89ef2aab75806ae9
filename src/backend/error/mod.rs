//! Backend Error Module
//!
//! This module turns failures into HTTP responses and defines the errors of
//! the server process itself.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Process-level error type (`BackendError`)
//! - **`conversion`** - `IntoResponse` for client-visible errors
//! - **`handler`** - The `ErrorHandler` capability and its error-map implementation
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! ├── conversion.rs - Error conversion implementations
//! └── handler.rs    - Failure classification
//! ```
//!
//! # Example
//!
//! ```rust
//! use axum::http::{Method, StatusCode};
//! use resterr_demo::backend::error::{ErrorHandler, RestErrorHandler};
//! use resterr_demo::backend::middleware::RequestContext;
//! use resterr_demo::shared::{ErrorMap, Failure, FailureKind};
//!
//! let handler = RestErrorHandler::new(ErrorMap::empty());
//! let ctx = RequestContext::detached(Method::GET, "/bar");
//! let response = handler.handle(&ctx, Failure::new(FailureKind::BarNotFound));
//! assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// Failure classification
pub mod handler;

// Re-export commonly used types
pub use types::BackendError;
pub use handler::{ErrorHandler, RestErrorHandler};
