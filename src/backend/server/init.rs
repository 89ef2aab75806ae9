/**
 * Server Initialization
 *
 * This module wires every resource from storage up to its HTTP handler and
 * assembles the router.
 *
 * # Initialization Process
 *
 * For each resource:
 * 1. Create the storage adapter
 * 2. Create the domain service on top of it
 * 3. Build the error map from its static declaration
 * 4. Create the HTTP handler with the service and the error handler
 *
 * An invalid error map declaration aborts startup.
 */

use axum::Router;
use std::sync::Arc;
use crate::backend::bar::{self, BarHandler, BarRepository};
use crate::backend::error::{BackendError, RestErrorHandler};
use crate::backend::foo::{self, FooHandler, FooRepository};
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::{ErrorMap, ErrorMapping};

/// Create and configure the Axum application with the default storage adapters
pub fn create_app() -> Result<Router<()>, BackendError> {
    let app_state = create_state(foo::repository::Postgres::new(), bar::repository::Postgres::new())?;
    Ok(create_router(app_state))
}

/// Wire both resources on top of the given storage adapters
pub fn create_state<F, B>(foo_repo: F, bar_repo: B) -> Result<AppState, BackendError>
where
    F: FooRepository + 'static,
    B: BarRepository + 'static,
{
    tracing::info!("Initializing foo resource");
    let foo_errors = error_handler("foo", foo::errormap::ERROR_MAPPINGS)?;
    let foo = FooHandler::new(Arc::new(foo::Service::new(foo_repo)), Arc::new(foo_errors));

    tracing::info!("Initializing bar resource");
    let bar_errors = error_handler("bar", bar::errormap::ERROR_MAPPINGS)?;
    let bar = BarHandler::new(Arc::new(bar::Service::new(bar_repo)), Arc::new(bar_errors));

    Ok(AppState { foo, bar })
}

fn error_handler(
    resource: &'static str,
    mappings: &[ErrorMapping],
) -> Result<RestErrorHandler, BackendError> {
    let map = ErrorMap::from_mappings(mappings).map_err(|e| BackendError::error_map(resource, e))?;
    tracing::debug!(resource, entries = map.len(), "Error map loaded");
    Ok(RestErrorHandler::new(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{ErrorMapError, FailureKind};

    #[test]
    fn test_create_app() {
        assert!(create_app().is_ok());
    }

    #[test]
    fn test_invalid_declaration_aborts_startup() {
        let mappings = [ErrorMapping::new(FailureKind::FooGetFailed, 204, "no content")];
        match error_handler("foo", &mappings) {
            Err(BackendError::ErrorMap { resource, source }) => {
                assert_eq!(resource, "foo");
                assert_eq!(source, ErrorMapError::invalid_status(FailureKind::FooGetFailed, 204));
            }
            other => panic!("Expected ErrorMap error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_declared_maps() {
        let foo = error_handler("foo", foo::errormap::ERROR_MAPPINGS).unwrap();
        assert!(foo.map().contains(FailureKind::FooGetFailed));
        assert_eq!(foo.map().len(), 1);

        let bar = error_handler("bar", bar::errormap::ERROR_MAPPINGS).unwrap();
        assert!(bar.map().is_empty());
    }
}
