use taller_server::build_router;
use taller_server::error::Result as ServerErrorResult;
use taller_server::logger;

use taller_core::{LocalClock, SharedClock};
use taller_hub::{AppState, ConnectionConfig, Metrics, ShutdownCoordinator, UidHub};

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Ignoring unreadable .env file: {e}");
    }

    let config = taller_config::Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Before any other logging
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting taller-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let pool = taller_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    taller_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let metrics = Metrics::new();
    let hub = UidHub::new(config.websocket.initial_uid.clone(), metrics.clone());
    let shutdown = ShutdownCoordinator::new();
    let clock: SharedClock = Arc::new(LocalClock);

    let app_state = AppState {
        pool: pool.clone(),
        hub,
        metrics,
        shutdown: shutdown.clone(),
        config: ConnectionConfig::from(&config.websocket),
        clock,
    };

    let static_dir = PathBuf::from(&config.static_files.dir);
    if !static_dir.is_dir() {
        warn!(
            "Static directory {} not found, only the API and /ws will answer",
            static_dir.display()
        );
    }

    let app = build_router(app_state, &static_dir);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on http://{}", actual_addr);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
        })
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
