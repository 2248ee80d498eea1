// HTTP Server

use crate::routes::router;
use ethgate_core::{Gateway, GatewayError, Result};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8080;

/// HTTP Server Configuration
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

/// Bind and serve the REST surface until the shutdown future resolves.
pub async fn serve(
    config: HttpServerConfig,
    gateway: Arc<Gateway>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| GatewayError::Config(format!("Failed to bind {addr}: {e}")))?;

    info!(host = %config.host, port = config.port, "HTTP server listening");

    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| GatewayError::Config(format!("HTTP server failed: {e}")))?;

    Ok(())
}
