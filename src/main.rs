use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use status_check_api::{cli::Cli, config::AppConfig, database, routes, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, DB_NAME, CORS_ORIGINS, etc.
    let _ = dotenvy::dotenv();

    telemetry::init_tracing(telemetry::DEFAULT_FILTER);

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("invalid configuration")?;
    info!("Starting status check API in {:?} mode", config.environment);

    let store = database::open_store(&config.database)
        .await
        .context("failed to open status store")?;

    let app = routes::app(store, &config);

    let bind_addr = cli.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Status check API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("Failed to install signal handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
