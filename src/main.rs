//! Helpdesk Cache - Scheduled ticket cache for a dashboard
//!
//! Pulls tickets from a helpdesk API on a fixed interval, keeps the latest
//! listing in a local store, serves it over HTTP and purges it once a day.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use helpdesk_cache::{
    api::create_router, spawn_scheduler, AppState, Config, Fetcher, Purger, SchedulerSettings,
    TicketClient,
};

/// Main entry point for the helpdesk cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared context (ticket store and refresh statistics)
/// 4. Start the refresh/purge scheduler
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. On SIGINT/SIGTERM, stop the scheduler and drain the server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helpdesk_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting helpdesk cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, refresh_interval={}s, purge_time={}, port={}, request_timeout={}s",
        config.api_url,
        config.refresh_interval,
        config.purge_time.format("%H:%M"),
        config.server_port,
        config.request_timeout
    );
    if config.api_token.is_empty() {
        warn!("TICKETS_API_TOKEN is not set, upstream requests will likely be rejected");
    }

    let state = AppState::from_config(&config);
    let client = TicketClient::from_config(&config).context("failed to build upstream client")?;
    let fetcher = Fetcher::new(client, state.store.clone(), state.stats.clone());
    let purger = Purger::new(state.store.clone(), state.stats.clone());

    let shutdown = CancellationToken::new();
    let scheduler_handle = spawn_scheduler(
        fetcher,
        purger,
        state.stats.clone(),
        SchedulerSettings::from_config(&config),
        shutdown.clone(),
    );
    info!("Background scheduler started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .context("server error")?;

    if let Err(e) = scheduler_handle.await {
        warn!("Scheduler task ended abnormally: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then cancels the scheduler.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    shutdown.cancel();
    info!("Scheduler cancellation requested");
}
