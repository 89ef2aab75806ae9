//! Foo Resource
//!
//! Storage adapter, domain service, error map and HTTP handler of the foo
//! resource. Failures flow from `repository` through `service` to `handler`,
//! which renders them with the map declared in `errormap`.
//!
//! # Module Structure
//!
//! ```text
//! foo/
//! ├── mod.rs        - Module exports and documentation
//! ├── repository.rs - Storage adapter
//! ├── service.rs    - Domain service and storage port
//! ├── errormap.rs   - Failure to JSON error declarations
//! └── handler.rs    - GET /foo handler and service port
//! ```

pub mod repository;
pub mod service;
pub mod errormap;
pub mod handler;

pub use handler::{get_foo, FooHandler, FooService};
pub use service::{FooRepository, Service};
