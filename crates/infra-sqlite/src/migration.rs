// Migration Runner

use ethgate_core::GatewayError;
use sqlx::SqlitePool;
use tracing::info;

/// Run database migrations sequentially, tracked in `schema_version`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), GatewayError> {
    info!("Running database migrations...");

    let table_exists: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| GatewayError::Database(e.to_string()))?;

    let current_version: i64 = if table_exists > 0 {
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(|e| GatewayError::Database(e.to_string()))?
            .unwrap_or(0)
    } else {
        0
    };

    info!("Current schema version: {}", current_version);

    if current_version < 1 {
        info!("Applying migration 001: Query log");
        apply_migration(pool, include_str!("../migrations/001_query_log.sql")).await?;
    }

    info!("All migrations applied successfully");
    Ok(())
}

/// Apply a single migration SQL file
async fn apply_migration(pool: &SqlitePool, sql: &str) -> Result<(), GatewayError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| GatewayError::Database(e.to_string()))?;

    // Split by semicolon and execute each statement
    for statement in sql.split(';') {
        let clean_statement: String = statement
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        if !clean_statement.is_empty() {
            sqlx::query(&clean_statement)
                .execute(&mut *tx)
                .await
                .map_err(|e| GatewayError::Database(e.to_string()))?;
        }
    }

    tx.commit()
        .await
        .map_err(|e| GatewayError::Database(e.to_string()))?;
    Ok(())
}
