// API Operation Domain Model

use crate::error::{GatewayError, Result};
use serde_json::Value;

/// Symbolic tags geth accepts in place of a block number
const BLOCK_TAGS: [&str; 3] = ["latest", "earliest", "pending"];

/// Identifies a block by number or by a symbolic tag / hex quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockSelector {
    Number(u64),
    Tag(String),
}

impl BlockSelector {
    /// Decode the `block_num` field of an inbound request body.
    ///
    /// Accepts a non-negative integer, a 0x-prefixed hex quantity, or one
    /// of the well-known tags. An absent field yields the validation
    /// message existing clients match on.
    pub fn from_request_value(value: Option<&Value>) -> Result<Self> {
        let value = value
            .ok_or_else(|| GatewayError::Validation("block_num is required".to_string()))?;

        match value {
            Value::Number(n) => n.as_u64().map(BlockSelector::Number).ok_or_else(|| {
                GatewayError::Validation(format!(
                    "block_num must be a non-negative integer, got {n}"
                ))
            }),
            Value::String(s) if BLOCK_TAGS.contains(&s.as_str()) => {
                Ok(BlockSelector::Tag(s.clone()))
            }
            Value::String(s) if is_hex_quantity(s) => Ok(BlockSelector::Tag(s.clone())),
            other => Err(GatewayError::Validation(format!(
                "block_num must be an integer, a 0x-prefixed hex quantity or a block tag, got {other}"
            ))),
        }
    }

    /// Wire encoding geth expects: hex quantity string or tag.
    pub fn to_param(&self) -> Value {
        match self {
            BlockSelector::Number(n) => Value::String(format!("{n:#x}")),
            BlockSelector::Tag(t) => Value::String(t.clone()),
        }
    }
}

fn is_hex_quantity(s: &str) -> bool {
    s.strip_prefix("0x")
        .map_or(false, |digits| {
            !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
}

/// One inbound API call, decoded and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOperation {
    /// Fetch one block, including all of its transactions (and their data)
    GetBlock { block: BlockSelector },
    /// Highest known block number, as reported by the node's syncing status
    LatestBlock,
}

impl ApiOperation {
    /// Decode a `get_block` request body field into an operation.
    pub fn get_block(block_num: Option<&Value>) -> Result<Self> {
        Ok(ApiOperation::GetBlock {
            block: BlockSelector::from_request_value(block_num)?,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ApiOperation::GetBlock { .. } => "get_block",
            ApiOperation::LatestBlock => "latest_block",
        }
    }
}
