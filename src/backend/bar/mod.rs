//! Bar Resource
//!
//! Storage adapter, domain service, error map and HTTP handler of the bar
//! resource. The bar service translates "not found" into "unavailable", and
//! the bar error map deliberately maps nothing.

pub mod repository;
pub mod service;
pub mod errormap;
pub mod handler;

pub use handler::{get_bar, BarHandler, BarService};
pub use service::{BarRepository, Service};
