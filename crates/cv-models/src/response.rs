//! Bot responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub messages: Vec<Message>,
}

/// A single outgoing message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub text: String,
    /// Simulated typing delay in milliseconds
    pub typing_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<i64>,
    /// Channel-specific rich content, passed through untouched
    #[serde(default)]
    pub blocks: Vec<Value>,
    pub seq: i64,
}
