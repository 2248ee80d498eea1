// ethgate Infrastructure - geth JSON-RPC Adapter
// Implements: NodeClient

mod client;
mod envelope;

pub use client::{GethClient, GethClientConfig};
pub use envelope::{RpcErrorObject, RpcRequest, RpcResponse};
