// Port Layer - Interfaces for external dependencies

pub mod node_client;
pub mod result_sink;
pub mod time_provider;

// Re-exports
pub use node_client::NodeClient;
pub use result_sink::ResultSink;
pub use time_provider::{SystemTimeProvider, TimeProvider};
