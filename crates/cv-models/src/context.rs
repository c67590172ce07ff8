//! Request context handed to bot code for a single execution

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context_modifier::ExecutionError;
use crate::flaggable::Flaggable;
use crate::response::Response;
use crate::session::Session;

/// Execution context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user: RequestUser,
    #[serde(default)]
    pub session: Session,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub origin_platform: String,
    /// Raw payload received from the channel
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub original_request: Value,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_trigger: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ExecutionError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Response>,
    #[serde(flatten)]
    pub flags: Flaggable,
}

/// The user behind a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub platform_id: String,
    #[serde(flatten)]
    pub flags: Flaggable,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_error(&mut self, error: ExecutionError) {
        self.errors.get_or_insert_with(Vec::new).push(error);
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}
