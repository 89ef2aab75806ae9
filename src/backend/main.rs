/**
 * REST Demo Server Entry Point
 *
 * Wires the foo and bar resources, serves them over HTTP and shuts down
 * gracefully on Ctrl-C.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use resterr_demo::backend::server::{create_state, App};
    use resterr_demo::backend::{bar, foo};
    use resterr_demo::shared::ServerConfig;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env().inspect_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
    })?;

    let app_state = create_state(foo::repository::Postgres::new(), bar::repository::Postgres::new())
        .inspect_err(|e| tracing::error!("Failed to initialize handlers: {}", e))?;

    let app = App::new(config, app_state);
    let addr = app.config().addr;

    app.run(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
    })
    .await
    .inspect_err(|e| tracing::error!(%addr, "Failed to run REST app: {}", e))?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin resterr-server --features ssr");
    std::process::exit(1);
}
