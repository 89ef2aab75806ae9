//! Server Module
//!
//! This module contains the transport shell: application state, wiring of
//! the resources and the HTTP server lifecycle.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - Resource wiring and app creation
//! - **`app`** - Serving, graceful shutdown and drain bound
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── init.rs         - Resource wiring and app creation
//! └── app.rs          - HTTP server lifecycle
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Wiring**: storage → service → error map → handler, per resource
//! 3. **Router Creation**: routes, request context and tracing layers
//! 4. **Serving**: until the shutdown signal, then bounded draining
//!
//! # Example
//!
//! ```rust,no_run
//! use resterr_demo::backend::server::{App, init::create_state};
//! use resterr_demo::backend::{bar, foo};
//! use resterr_demo::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = create_state(foo::repository::Postgres::new(), bar::repository::Postgres::new())?;
//! let app = App::new(ServerConfig::from_env()?, state);
//! app.run(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

/// HTTP server lifecycle
pub mod app;

// Re-export commonly used types
pub use state::AppState;
pub use init::{create_app, create_state};
pub use app::App;
