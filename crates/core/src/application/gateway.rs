// Gateway Orchestrator

use crate::application::request::build_request;
use crate::application::response::{map_error, map_response};
use crate::domain::{ApiOperation, GatewayResult};
use crate::port::{NodeClient, ResultSink};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates one inbound call: map the operation to a JSON-RPC request,
/// invoke the upstream node, map the outcome back to an HTTP result.
///
/// Stateless across calls; concurrent calls are independent. `execute`
/// never returns an error: every failure becomes a `GatewayResult` for the
/// caller that triggered it.
pub struct Gateway {
    node: Arc<dyn NodeClient>,
    sink: Option<Arc<dyn ResultSink>>,
}

impl Gateway {
    pub fn new(node: Arc<dyn NodeClient>, sink: Option<Arc<dyn ResultSink>>) -> Self {
        Self { node, sink }
    }

    /// POST /get_block: fetch one block with full transaction bodies.
    pub async fn get_block(&self, block_num: Option<&Value>) -> GatewayResult {
        match ApiOperation::get_block(block_num) {
            Ok(operation) => self.execute(operation).await,
            Err(e) => {
                let result = map_error(&e);
                self.dispatch_to_sink("get_block", &result);
                result
            }
        }
    }

    /// GET /latest_block: highest block number per the node's syncing status.
    pub async fn latest_block(&self) -> GatewayResult {
        self.execute(ApiOperation::LatestBlock).await
    }

    async fn execute(&self, operation: ApiOperation) -> GatewayResult {
        let call = build_request(&operation);
        let outcome = self.node.call(call.method, call.params).await;
        if let Err(e) = &outcome {
            warn!(operation = operation.name(), error = %e, "Upstream call failed");
        }

        let result = map_response(&operation, outcome);
        info!(
            operation = operation.name(),
            status = result.http_status,
            "Operation completed"
        );
        self.dispatch_to_sink(operation.name(), &result);
        result
    }

    // Fire-and-forget: the write is spawned, never awaited on the response
    // path, and a failed write only logs a warning.
    fn dispatch_to_sink(&self, operation: &'static str, result: &GatewayResult) {
        let Some(sink) = self.sink.clone() else {
            return;
        };
        let result = result.clone();
        tokio::spawn(async move {
            if let Err(e) = sink.record(operation, &result).await {
                warn!(operation, error = %e, "Query log write failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::port::node_client::MockNodeClient;
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use serde_json::json;
    use std::sync::Mutex;

    fn gateway(node: MockNodeClient) -> Gateway {
        Gateway::new(Arc::new(node), None)
    }

    #[tokio::test]
    async fn get_block_success_returns_200_with_the_block() {
        let block = json!({"number": "0xf4241", "transactions": []});
        let mut node = MockNodeClient::new();
        let response = block.clone();
        node.expect_call()
            .with(
                eq("eth_getBlockByNumber"),
                eq(vec![json!("0xf4241"), json!(true)]),
            )
            .times(1)
            .returning(move |_, _| Ok(response.clone()));

        let result = gateway(node).get_block(Some(&json!(1_000_001))).await;
        assert_eq!(result.http_status, 200);
        assert_eq!(result.body, json!({ "result": block }));
    }

    #[tokio::test]
    async fn missing_block_num_never_reaches_the_node() {
        let mut node = MockNodeClient::new();
        node.expect_call().times(0);

        let result = gateway(node).get_block(None).await;
        assert_eq!(result.http_status, 400);
        assert_eq!(result.body, json!({ "error": "block_num is required" }));
    }

    #[tokio::test]
    async fn transport_failure_is_isolated_to_a_500() {
        let mut node = MockNodeClient::new();
        node.expect_call()
            .returning(|_, _| Err(GatewayError::Transport("connection refused".to_string())));

        let result = gateway(node).get_block(Some(&json!("latest"))).await;
        assert_eq!(result.http_status, 500);
        assert!(result.body["error"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn latest_block_reads_highest_block_from_syncing_status() {
        let mut node = MockNodeClient::new();
        node.expect_call()
            .with(eq("eth_syncing"), eq(Vec::<serde_json::Value>::new()))
            .times(1)
            .returning(|_, _| Ok(json!({"highestBlock": "0x454", "currentBlock": "0x386"})));

        let result = gateway(node).latest_block().await;
        assert_eq!(result.http_status, 200);
        assert_eq!(result.body, json!({ "result": "0x454" }));
    }

    #[tokio::test]
    async fn identical_calls_yield_identical_results() {
        let mut node = MockNodeClient::new();
        node.expect_call()
            .times(2)
            .returning(|_, _| Ok(json!({"number": "0x2a"})));

        let gw = gateway(node);
        let first = gw.get_block(Some(&json!(42))).await;
        let second = gw.get_block(Some(&json!(42))).await;
        assert_eq!(first, second);
    }

    struct RecordingSink {
        records: Mutex<Vec<(String, u16)>>,
    }

    #[async_trait]
    impl ResultSink for RecordingSink {
        async fn record(&self, operation: &str, result: &GatewayResult) -> crate::Result<()> {
            self.records
                .lock()
                .unwrap()
                .push((operation.to_string(), result.http_status));
            Ok(())
        }
    }

    #[tokio::test]
    async fn results_are_handed_to_the_sink_off_the_response_path() {
        let mut node = MockNodeClient::new();
        node.expect_call().returning(|_, _| Ok(json!(null)));
        let sink = Arc::new(RecordingSink {
            records: Mutex::new(Vec::new()),
        });

        let gw = Gateway::new(Arc::new(node), Some(sink.clone()));
        let result = gw.get_block(Some(&json!(1))).await;
        assert_eq!(result.http_status, 200);

        // The write is spawned; give it a moment to land
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        let records = sink.records.lock().unwrap();
        assert_eq!(records.as_slice(), &[("get_block".to_string(), 200)]);
    }
}
