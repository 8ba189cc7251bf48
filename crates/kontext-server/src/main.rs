//! # Kontext Server
//!
//! Main entry point for the Kontext application. Wires the entity store,
//! domain service, process layer, and HTTP resource together and serves
//! the REST API.

use kontext_clients::{HttpMessagingService, HttpReferenceDataClient};
use kontext_config::ConfigLoader;
use kontext_core::{KontextError, KontextResult};
use kontext_process::BoundedContextProcess;
use kontext_repository::{create_pool, MySqlBoundedContextRepository};
use kontext_rest::{create_router, AppState};
use kontext_security::TokenProvider;
use kontext_service::BoundedContextServiceImpl;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Kontext Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> KontextResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Constructor wiring: store -> service -> process
    let repository = Arc::new(MySqlBoundedContextRepository::new(db_pool.clone()));
    let service = Arc::new(BoundedContextServiceImpl::new(repository));

    let reference_data = Arc::new(HttpReferenceDataClient::new(&config.remote)?);
    let messaging = Arc::new(HttpMessagingService::new(&config.remote)?);
    let process = Arc::new(BoundedContextProcess::new(
        service,
        reference_data,
        messaging,
    ));

    let token_provider = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));

    // Create REST router
    let app_state = AppState::new(process);
    let router = create_router(app_state, token_provider, &config.server);

    // Start REST server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| KontextError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| KontextError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kontext=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
