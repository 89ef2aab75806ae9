//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! two resources whose failures are mapped to client responses.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Application state, wiring, server lifecycle
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`foo`** - Foo resource (storage, service, error map, handler)
//! - **`bar`** - Bar resource (storage, service, error map, handler)
//! - **`middleware`** - Request context
//! - **`error`** - Failure classification and backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── foo/            - Foo resource
//! ├── bar/            - Bar resource
//! ├── middleware/     - Request middleware
//! └── error/          - Error handler and error types
//! ```
//!
//! # Failure Flow
//!
//! ```text
//! storage ──Failure──▶ service ──Failure──▶ handler ──Failure──▶ error handler ──▶ Response
//!          (identity)   (translate or wrap)   (wrap)               (map lookup)
//! ```
//!
//! Every failure reaches the error handler exactly once and produces exactly
//! one response. Only error map entries are ever shown to the client.
//!
//! # Thread Safety
//!
//! Error maps are immutable after startup and shared behind `Arc`. Request
//! handling touches no shared mutable state.

/// Server setup and lifecycle
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Foo resource
#[cfg(feature = "ssr")]
pub mod foo;

/// Bar resource
#[cfg(feature = "ssr")]
pub mod bar;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Backend error types and failure classification
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, App, AppState};
#[cfg(feature = "ssr")]
pub use error::{BackendError, ErrorHandler, RestErrorHandler};
