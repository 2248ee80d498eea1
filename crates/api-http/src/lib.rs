// HTTP API Layer
//
// REST surface in front of the gateway: decodes inbound bodies into
// operations, renders GatewayResults as HTTP responses.

pub mod routes;
pub mod server;
pub mod types;

pub use routes::router;
pub use server::{serve, HttpServerConfig};
