// HTTP Request Types

use serde::Deserialize;
use serde_json::Value;

/// POST /get_block body. `block_num` stays a raw JSON value here; the core
/// validates it (integer, hex quantity or tag) and owns the error message.
#[derive(Debug, Deserialize)]
pub struct GetBlockRequest {
    #[serde(default)]
    pub block_num: Option<Value>,
}
