// JSON-RPC 2.0 Wire Envelope

use ethgate_core::{GatewayError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const JSONRPC_VERSION: &str = "2.0";

/// One outbound JSON-RPC 2.0 request. Built per call, immutable once
/// built, dropped after the matching response (or the timeout) arrives.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl RpcRequest {
    pub fn new(method: &str, params: Vec<Value>, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.to_string(),
            params,
            id,
        }
    }
}

/// Error object carried by a failed JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// One inbound JSON-RPC 2.0 response.
///
/// Exactly one of result/error must be present; any other combination is a
/// protocol violation surfaced to the caller, never silently resolved by
/// preferring one field.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    // An explicit `"result": null` is a legitimate answer (unknown block),
    // so null must stay distinguishable from an absent field.
    #[serde(default, deserialize_with = "preserve_null")]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

fn preserve_null<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RpcResponse {
    /// Enforce the envelope contract and extract the result value.
    ///
    /// A success response must echo the originating request's id; error
    /// responses are passed through as protocol errors (geth may answer
    /// a null id on requests it could not parse).
    pub fn into_result(self, request_id: u64) -> Result<Value> {
        match (self.result, self.error) {
            (Some(_), Some(e)) => Err(GatewayError::Protocol {
                code: e.code,
                message: format!("response carries both result and error ({})", e.message),
            }),
            (None, None) => Err(GatewayError::Protocol {
                code: 0,
                message: "response carries neither result nor error".to_string(),
            }),
            (None, Some(e)) => Err(GatewayError::Protocol {
                code: e.code,
                message: e.message,
            }),
            (Some(value), None) => {
                if self.id != Some(request_id) {
                    return Err(GatewayError::Protocol {
                        code: 0,
                        message: format!(
                            "response id {:?} does not match request id {request_id}",
                            self.id
                        ),
                    });
                }
                Ok(value)
            }
        }
    }
}
