// Central Error Type for the Gateway

use thiserror::Error;

/// Gateway-level error taxonomy.
///
/// No variant is fatal to the process: each inbound call's failure is
/// isolated and reported back to its own caller.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Bad inbound input; the request never reaches the upstream node
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network failure reaching the upstream node (connection refused,
    /// timeout, unreadable response body)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream node returned a JSON-RPC error object, or the
    /// response violated the JSON-RPC envelope contract
    #[error("RPC protocol error {code}: {message}")]
    Protocol { code: i64, message: String },

    /// Response well-formed per JSON-RPC but missing an expected domain field
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// HTTP status this error is reported as. Validation failures are the
    /// caller's fault (400); everything else is a gateway/upstream fault (500).
    pub fn http_status(&self) -> u16 {
        match self {
            GatewayError::Validation(_) => 400,
            _ => 500,
        }
    }
}

/// Result type alias using GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;
