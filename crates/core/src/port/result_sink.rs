// Result Sink Port (optional query log)

use crate::domain::GatewayResult;
use crate::error::Result;
use async_trait::async_trait;

/// Optional sink the gateway hands finished results to.
///
/// Invoked fire-and-forget after the result is produced: never on the
/// response path, never able to fail the HTTP response.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn record(&self, operation: &str, result: &GatewayResult) -> Result<()>;
}
