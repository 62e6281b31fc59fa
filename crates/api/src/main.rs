use std::net::SocketAddr;
use std::sync::Arc;

use apexverse_api::config::ServerConfig;
use apexverse_api::router::build_app_router;
use apexverse_api::state::AppState;
use apexverse_api::telemetry::init_tracing;
use apexverse_extract::OEmbedExtractor;
use apexverse_notify::ContactNotifier;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing("apexverse_api=debug,apexverse_db=info,tower_http=debug");

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage ---
    let store = match apexverse_db::select_store(config.database_url.as_deref()).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialise storage");
            std::process::exit(1);
        }
    };
    tracing::info!(backend = store.backend_name(), "Storage ready");

    // --- Content extraction ---
    let extractor =
        OEmbedExtractor::new(config.extract.clone()).expect("Failed to build oEmbed HTTP client");

    // --- Contact notifications ---
    let notifier = ContactNotifier::from_env();
    if notifier.email_enabled() {
        tracing::info!("Contact notification email enabled");
    } else {
        tracing::warn!("SMTP_HOST not set, contact notifications will only be logged");
    }

    // --- App state ---
    let state = AppState {
        store,
        extractor: Arc::new(extractor),
        notifier,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
