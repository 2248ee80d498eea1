// Application Layer - Request/response mapping and orchestration

pub mod gateway;
pub mod request;
pub mod response;

// Re-exports
pub use gateway::Gateway;
pub use request::{build_request, RpcCall};
pub use response::{map_error, map_response};
