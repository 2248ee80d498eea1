// Gateway Result Model

use serde_json::Value;

/// Final outcome of one inbound call: the HTTP status and JSON body handed
/// back to the external caller. Produced exactly once per call; the gateway
/// never streams or partially responds.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResult {
    pub http_status: u16,
    pub body: Value,
}

impl GatewayResult {
    pub fn is_success(&self) -> bool {
        self.http_status < 400
    }
}
