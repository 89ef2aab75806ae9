//! REST Error Demo - Main Library
//!
//! A layered HTTP service demonstrating how failures travel from storage,
//! through business logic, to a protocol-appropriate client response without
//! leaking internal detail.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the HTTP stack
//!   - Failure identities and cause chains
//!   - Error maps and client-visible error responses
//!   - Server configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and request context
//!   - Foo and bar resources (storage, service, error map, handler)
//!   - The error handler that classifies failures
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use resterr_demo::backend::server::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app()?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::Failure` for request failures; classified, never propagated to clients verbatim
//! - `shared::ErrorMapError` and `shared::ConfigError` for startup validation
//! - `backend::BackendError` for process-level failures

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
