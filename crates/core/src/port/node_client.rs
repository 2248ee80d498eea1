// Node Client Port (upstream JSON-RPC access)

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Upstream node interface (allows mocking in tests).
///
/// One invocation issues one JSON-RPC 2.0 request and resolves with the
/// parsed `result` value or a transport/protocol error. Implementations
/// perform no retries; retry policy belongs to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NodeClient: Send + Sync {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value>;
}
