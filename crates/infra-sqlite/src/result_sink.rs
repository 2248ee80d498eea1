// SQLite ResultSink Implementation

use async_trait::async_trait;
use ethgate_core::domain::GatewayResult;
use ethgate_core::port::{ResultSink, TimeProvider};
use ethgate_core::{GatewayError, Result};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;

/// Appends one `query_log` row per gateway result.
///
/// Called fire-and-forget from the gateway; a failed insert is reported to
/// the caller's spawned task and logged there, never to the HTTP client.
pub struct SqliteResultSink {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteResultSink {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl ResultSink for SqliteResultSink {
    async fn record(&self, operation: &str, result: &GatewayResult) -> Result<()> {
        let body = serde_json::to_string(&result.body)?;
        let recorded_at = self.time_provider.now_millis();

        sqlx::query(
            "INSERT INTO query_log (operation, http_status, body, recorded_at) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(operation)
        .bind(i64::from(result.http_status))
        .bind(&body)
        .bind(recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::Database(e.to_string()))?;

        debug!(operation, status = result.http_status, "Query logged");
        Ok(())
    }
}
