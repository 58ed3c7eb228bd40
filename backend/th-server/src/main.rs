use th_core::SystemClock;
use th_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = th_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting th-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database (WAL, migrations applied)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = th_db::open_pool(&database_path, config.database.max_connections).await?;

    let state = AppState::new(pool.clone(), Arc::new(SystemClock));
    let store = state.store.clone();
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual bound address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    // Flush the WAL so the database file is self-contained
    match store.persist().await {
        Ok(written) => info!("Final checkpoint complete (written: {})", written),
        Err(e) => warn!("Final checkpoint failed: {}", e),
    }
    pool.close().await;

    info!("Graceful shutdown complete");
    Ok(())
}
