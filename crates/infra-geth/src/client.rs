// geth Client (HTTP transport)

use crate::envelope::{RpcRequest, RpcResponse};
use async_trait::async_trait;
use ethgate_core::port::NodeClient;
use ethgate_core::{GatewayError, Result};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Upstream node endpoint, resolved once before the client is constructed
#[derive(Debug, Clone)]
pub struct GethClientConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Default for GethClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8545,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// JSON-RPC 2.0 client for the upstream geth endpoint.
///
/// Correlation ids come from an atomic counter, one per call, so
/// concurrent calls may share the pooled connection safely. The request
/// timeout surfaces as a transport error; no retry happens here.
pub struct GethClient {
    http: reqwest::Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl GethClient {
    pub fn new(config: GethClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: format!("http://{}:{}", config.host, config.port),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NodeClient for GethClient {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(method, params, id);
        debug!(method, id, "Issuing JSON-RPC call");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(format!("malformed response body: {e}")))?;

        envelope.into_result(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_built_from_host_and_port() {
        let client = GethClient::new(GethClientConfig {
            host: "10.0.0.5".to_string(),
            port: 8546,
            request_timeout: Duration::from_secs(5),
        })
        .unwrap();
        assert_eq!(client.endpoint(), "http://10.0.0.5:8546");
    }

    #[test]
    fn default_config_targets_the_local_geth_port() {
        let config = GethClientConfig::default();
        assert_eq!(config.port, 8545);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn unreachable_node_is_a_transport_error() {
        // Reserved TEST-NET-1 address, nothing listens there
        let client = GethClient::new(GethClientConfig {
            host: "192.0.2.1".to_string(),
            port: 8545,
            request_timeout: Duration::from_millis(100),
        })
        .unwrap();

        let err = client.call("eth_syncing", vec![]).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)), "{err}");
    }
}
