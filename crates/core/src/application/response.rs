// Response Mapper - JSON-RPC outcome to HTTP status and body

use crate::domain::{ApiOperation, GatewayResult};
use crate::error::GatewayError;
use serde_json::{json, Value};

/// Field of the eth_syncing result carrying the highest known block
const HIGHEST_BLOCK_FIELD: &str = "highestBlock";

/// Map an upstream outcome to the final HTTP result for one operation.
pub fn map_response(
    operation: &ApiOperation,
    outcome: Result<Value, GatewayError>,
) -> GatewayResult {
    let extracted = outcome.and_then(|value| extract_result(operation, value));
    match extracted {
        Ok(value) => GatewayResult {
            http_status: 200,
            body: json!({ "result": value }),
        },
        Err(e) => map_error(&e),
    }
}

/// Render an error as the final HTTP result.
///
/// Validation messages are passed through bare (clients match on them);
/// everything else is reported with its error-class prefix.
pub fn map_error(error: &GatewayError) -> GatewayResult {
    let message = match error {
        GatewayError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    };
    GatewayResult {
        http_status: error.http_status(),
        body: json!({ "error": message }),
    }
}

/// Per-operation success extraction.
fn extract_result(operation: &ApiOperation, value: Value) -> Result<Value, GatewayError> {
    match operation {
        ApiOperation::GetBlock { .. } => Ok(value),
        // eth_syncing answers a status object while the node is catching up
        // and plain `false` once it is synced; only the object carries
        // highestBlock. The mismatch must surface, never an absent value.
        ApiOperation::LatestBlock => match value {
            Value::Object(mut status) => status.remove(HIGHEST_BLOCK_FIELD).ok_or_else(|| {
                GatewayError::ShapeMismatch(
                    "eth_syncing result has no highestBlock field".to_string(),
                )
            }),
            other => Err(GatewayError::ShapeMismatch(format!(
                "eth_syncing returned {other} instead of a syncing-status object \
                 (node fully synced?)"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BlockSelector;
    use serde_json::json;

    fn get_block_op() -> ApiOperation {
        ApiOperation::GetBlock {
            block: BlockSelector::Number(1_000_001),
        }
    }

    #[test]
    fn get_block_success_wraps_the_block_in_result() {
        let block = json!({"number": "0xf4241", "transactions": []});
        let result = map_response(&get_block_op(), Ok(block.clone()));
        assert_eq!(result.http_status, 200);
        assert_eq!(result.body, json!({ "result": block }));
    }

    #[test]
    fn get_block_null_result_is_passed_through() {
        // eth_getBlockByNumber answers null for unknown blocks
        let result = map_response(&get_block_op(), Ok(Value::Null));
        assert_eq!(result.http_status, 200);
        assert_eq!(result.body, json!({ "result": null }));
    }

    #[test]
    fn latest_block_extracts_highest_block() {
        let syncing = json!({
            "startingBlock": "0x384",
            "currentBlock": "0x386",
            "highestBlock": "0x454"
        });
        let result = map_response(&ApiOperation::LatestBlock, Ok(syncing));
        assert_eq!(result.http_status, 200);
        assert_eq!(result.body, json!({ "result": "0x454" }));
    }

    #[test]
    fn latest_block_on_synced_node_is_a_shape_mismatch() {
        // A synced node answers plain false; documented limitation
        let result = map_response(&ApiOperation::LatestBlock, Ok(json!(false)));
        assert_eq!(result.http_status, 500);
        let message = result.body["error"].as_str().unwrap();
        assert!(message.contains("eth_syncing"), "{message}");
    }

    #[test]
    fn latest_block_without_highest_block_field_is_a_shape_mismatch() {
        let result = map_response(&ApiOperation::LatestBlock, Ok(json!({"currentBlock": "0x1"})));
        assert_eq!(result.http_status, 500);
        assert!(result.body["error"]
            .as_str()
            .unwrap()
            .contains("highestBlock"));
    }

    #[test]
    fn transport_errors_map_to_500_with_reason() {
        let result = map_response(
            &get_block_op(),
            Err(GatewayError::Transport("connection refused".to_string())),
        );
        assert_eq!(result.http_status, 500);
        assert!(result.body["error"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }

    #[test]
    fn protocol_errors_pass_the_upstream_message_through() {
        let result = map_response(
            &get_block_op(),
            Err(GatewayError::Protocol {
                code: -32602,
                message: "invalid argument".to_string(),
            }),
        );
        assert_eq!(result.http_status, 500);
        assert!(result.body["error"]
            .as_str()
            .unwrap()
            .contains("invalid argument"));
    }

    #[test]
    fn validation_errors_map_to_400_with_the_bare_message() {
        let result = map_error(&GatewayError::Validation("block_num is required".to_string()));
        assert_eq!(result.http_status, 400);
        assert_eq!(result.body, json!({ "error": "block_num is required" }));
    }
}
