//! Executions
//!
//! An execution is one run of a blueprint in response to a user message or
//! trigger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context_modifier::{ContextModifier, ExecutionError};
use crate::response::Response;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: String,
    pub user_id: String,
    pub channel_user_id: String,
    pub session_id: String,
    pub environment_id: String,
    pub blueprint_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_data: Option<Value>,

    pub text: String,
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    pub is_start: bool,
    pub is_trigger: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ExecutionError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Response>,
    #[serde(default)]
    pub logs: Vec<ExecutionLog>,

    /// Duration in milliseconds
    pub execution_duration: i64,
    pub start_time: DateTime<Utc>,
}

/// A step recorded while walking the blueprint graph
///
/// Field names follow the platform's compact log format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionLog {
    /// Graph
    pub gid: i64,
    /// Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nid: Option<i64>,
    /// Link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lid: Option<i64>,
    /// Entry type
    pub ety: i64,
    /// Entry time
    pub eti: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmo: Option<ContextModifier>,
}

/// Page of executions matching a query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionQueryResult {
    pub executions: Vec<Execution>,
    /// Total matches across all pages
    pub total: i64,
}

impl Execution {
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}
