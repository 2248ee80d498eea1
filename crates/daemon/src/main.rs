//! ethgate - Main Entry Point
//! HTTP gateway in front of a geth JSON-RPC endpoint

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use ethgate_api_http::{serve, HttpServerConfig};
use ethgate_core::port::{ResultSink, SystemTimeProvider};
use ethgate_core::Gateway;
use ethgate_infra_geth::{GethClient, GethClientConfig};
use ethgate_infra_sqlite::{create_pool, run_migrations, SqliteResultSink};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = std::env::var("ETHGATE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("ethgate=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("ethgate v{} starting...", VERSION);

    // 2. Load configuration (resolved once, before anything is constructed)
    let node_config = GethClientConfig {
        host: std::env::var("ETHGATE_NODE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        port: std::env::var("ETHGATE_NODE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8545),
        request_timeout: Duration::from_secs(
            std::env::var("ETHGATE_NODE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        ),
    };

    let http_config = HttpServerConfig {
        host: std::env::var("ETHGATE_HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        port: std::env::var("ETHGATE_HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080),
    };

    // 3. Upstream node client
    let node = Arc::new(GethClient::new(node_config)?);
    info!(endpoint = node.endpoint(), "Upstream node configured");

    // 4. Optional query log (disabled unless a database path is given)
    let sink: Option<Arc<dyn ResultSink>> = match std::env::var("ETHGATE_DB_PATH") {
        Ok(db_path) => {
            info!(db_path = %db_path, "Initializing query log...");
            let pool = create_pool(&db_path).await?;
            run_migrations(&pool).await?;
            Some(Arc::new(SqliteResultSink::new(
                pool,
                Arc::new(SystemTimeProvider),
            )))
        }
        Err(_) => {
            info!("Query log disabled (ETHGATE_DB_PATH not set)");
            None
        }
    };

    // 5. Wire the gateway and serve until shutdown
    let gateway = Arc::new(Gateway::new(node, sink));

    info!("Starting HTTP server...");
    serve(http_config, gateway, shutdown_signal()).await?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received. Exiting gracefully...");
}
