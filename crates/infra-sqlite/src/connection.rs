// SQLite Connection Pool Setup

use ethgate_core::GatewayError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Create the query-log connection pool with WAL mode and a busy timeout.
///
/// The query log sees only append traffic off the response path, so a
/// small pool is plenty.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, GatewayError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| GatewayError::Database(e.to_string()))?
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .map_err(|e| GatewayError::Database(e.to_string()))?;

    Ok(pool)
}
