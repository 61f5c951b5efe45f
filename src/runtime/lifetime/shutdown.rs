use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// 关闭超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Wait for Ctrl+C, then close the connection pool if one was opened
///
/// Inserts are single transactions, so there is nothing to flush; closing
/// the pool lets SQLite checkpoint its WAL.
pub async fn listen_for_shutdown(db: Option<DatabaseConnection>) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, closing storage...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    let Some(db) = db else {
        info!("No database connection to close");
        return;
    };

    match timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), db.close()).await {
        Ok(Ok(())) => info!("Database connections closed"),
        Ok(Err(e)) => error!("Failed to close database connections: {}", e),
        Err(_) => error!(
            "Closing database timed out after {} seconds",
            SHUTDOWN_TIMEOUT_SECS
        ),
    }
}
