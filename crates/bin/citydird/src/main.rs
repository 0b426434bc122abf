//! # citydird — citydir daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file + env overrides)
//! - Initialize tracing
//! - Construct the JSON document repository (adapter)
//! - Construct the directory service, injecting the repository via its port
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use citydir_adapter_http_axum::router;
use citydir_adapter_http_axum::state::AppState;
use citydir_adapter_storage_json::JsonCatalogRepository;
use citydir_app::services::directory_service::DirectoryService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Storage
    let repo = JsonCatalogRepository::new(config.storage_path());

    // Services
    let directory = DirectoryService::new(repo);

    // HTTP
    let state = AppState::new(directory);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "citydird listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
