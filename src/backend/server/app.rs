/**
 * HTTP Application
 *
 * This module implements the transport shell: it binds the listen address,
 * serves the router until a shutdown signal arrives, then stops accepting new
 * connections and waits for in-flight requests to finish.
 *
 * Every connection runs as an HTTP/1 task owned by the server, so nothing
 * outlives `run`/`serve`.
 *
 * # Shutdown
 *
 * Draining is bounded by `ServerConfig::shutdown_timeout`. If requests are
 * still running when the bound expires, the remaining connection tasks are
 * aborted and `run`/`serve` return `BackendError::ShutdownTimeout`.
 */

use axum::Router;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use hyper_util::server::graceful::GracefulShutdown;
use hyper_util::service::TowerToHyperService;
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Pause after a failed `accept`, e.g. when the process is out of file descriptors
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// The HTTP server of the application
pub struct App {
    config: ServerConfig,
    router: Router<()>,
}

impl App {
    /// Create an application serving the routes of `app_state`
    pub fn new(config: ServerConfig, app_state: AppState) -> Self {
        Self {
            config,
            router: create_router(app_state),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// A handle to the router, for in-process requests
    pub fn router(&self) -> Router<()> {
        self.router.clone()
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> Result<(), BackendError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| BackendError::bind(addr, e))?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), BackendError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let timeout = self.config.shutdown_timeout;
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(%addr, "Starting REST demo app");
        }

        let graceful = GracefulShutdown::new();
        let mut connections = JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            let (stream, remote) = tokio::select! {
                _ = &mut shutdown => break,
                Some(_) = connections.join_next() => continue,
                accepted = listener.accept() => match accepted {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        tracing::warn!("Failed to accept connection: {}", e);
                        tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                        continue;
                    }
                },
            };

            let service = TowerToHyperService::new(self.router.clone());
            let conn = http1::Builder::new().serve_connection(TokioIo::new(stream), service);
            let conn = graceful.watch(conn);
            connections.spawn(async move {
                if let Err(e) = conn.await {
                    tracing::debug!(%remote, "Connection closed with error: {}", e);
                }
            });
        }

        drop(listener);
        tracing::info!(in_flight = connections.len(), "Server shutting down");

        match tokio::time::timeout(timeout, graceful.shutdown()).await {
            Ok(()) => {
                connections.shutdown().await;
                tracing::warn!("Server closed");
                Ok(())
            }
            Err(_) => {
                tracing::error!(
                    ?timeout,
                    aborted = connections.len(),
                    "In-flight requests did not drain in time"
                );
                connections.shutdown().await;
                Err(BackendError::ShutdownTimeout(timeout))
            }
        }
    }
}
