// Domain Layer - Gateway operations and results

pub mod operation;
pub mod result;

// Re-exports
pub use operation::{ApiOperation, BlockSelector};
pub use result::GatewayResult;
