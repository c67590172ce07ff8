//! Triggered executions

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context_modifier::ContextModifier;

/// Start an execution on behalf of a channel user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_modifier: Option<ContextModifier>,
    pub channel_id: String,
    pub text: String,
    pub is_start: bool,
    pub is_trigger: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
}

impl TriggerRequest {
    /// A trigger carrying `text` for the given channel user
    pub fn new(channel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            text: text.into(),
            is_trigger: true,
            ..Default::default()
        }
    }

    pub fn with_context_modifier(mut self, modifier: ContextModifier) -> Self {
        self.context_modifier = Some(modifier);
        self
    }

    pub fn starting(mut self) -> Self {
        self.is_start = true;
        self
    }
}
