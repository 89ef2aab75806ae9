//! Middleware Module
//!
//! This module contains the HTTP middleware of the backend server.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`context`** - Request id and `RequestContext` extraction
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use resterr_demo::backend::middleware::request_context_middleware;
//!
//! let router: Router = Router::new().layer(middleware::from_fn(request_context_middleware));
//! ```

pub mod context;

pub use context::{RequestContext, request_context_middleware, REQUEST_ID_HEADER};
