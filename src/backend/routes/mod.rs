//! Route Configuration Module
//!
//! This module configures the HTTP routes of the backend server.
//!
//! # Route Types
//!
//! - `GET /foo` - Foo resource; failures mapped by the foo error map
//! - `GET /bar` - Bar resource; every failure masked as `500`
//!
//! # Dependencies
//!
//! - `backend::server::state` - Application state
//! - `backend::foo`, `backend::bar` - Resource handlers
//! - `backend::middleware` - Request context

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
