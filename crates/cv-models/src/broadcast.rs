//! Broadcasts
//!
//! A broadcast sends a message to every user matched by a user query.

use cv_queries::UserQuery;
use serde::{Deserialize, Serialize};

use crate::context_modifier::ContextModifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastInput {
    pub broadcast_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_modifier: Option<ContextModifier>,
    pub channel: String,
    pub user_query: UserQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastResult {
    pub status: String,
    /// Number of users the broadcast was queued for
    pub users: i64,
}
