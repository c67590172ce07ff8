//! Users
//!
//! A super user is the platform-wide identity; each channel (Telegram,
//! web chat, ...) the person talks through has its own channel user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperUser {
    pub id: String,
    pub environment_id: String,
    #[serde(default)]
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub channel_users: Vec<ChannelUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelUser {
    pub channel_id: String,
    pub environment_id: String,
    pub channel: String,
    #[serde(default)]
    pub data: Value,
    pub super_user_id: String,
    #[serde(default)]
    pub session: Session,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Page of users matching a query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserQueryResult {
    pub users: Vec<SuperUser>,
    pub count: i64,
}

/// Number of users a query would reach
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQueryReachableResult {
    pub count: i64,
}

/// Merge several super users into one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeUsersRequest {
    pub super_user_ids: Vec<String>,
    /// Fields for which the newest user's value wins
    pub prefer_new_user_fields: Vec<String>,
}

/// Replacement data for a user or session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDataInput {
    pub data: Value,
}

impl SuperUser {
    pub fn channel_user(&self, channel: &str) -> Option<&ChannelUser> {
        self.channel_users.iter().find(|u| u.channel == channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_query_result_decode() {
        let result: UserQueryResult = serde_json::from_value(json!({
            "users": [{
                "id": "su-1",
                "environmentId": "env-1",
                "data": {"name": "Ann"},
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-02T00:00:00Z",
                "channelUsers": [{
                    "channelId": "tg-42",
                    "environmentId": "env-1",
                    "channel": "telegram",
                    "data": {},
                    "superUserId": "su-1",
                    "session": {"ver": "2"},
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                }]
            }],
            "count": 1
        }))
        .unwrap();

        let user = &result.users[0];
        assert_eq!(user.data["name"], "Ann");
        assert_eq!(user.channel_user("telegram").map(|u| u.channel_id.as_str()), Some("tg-42"));
        assert!(user.channel_user("web").is_none());
        assert_eq!(user.channel_users[0].session.ver, "2");
    }

    #[test]
    fn test_merge_request_wire_format() {
        let req = MergeUsersRequest {
            super_user_ids: vec!["a".to_string(), "b".to_string()],
            prefer_new_user_fields: vec!["email".to_string()],
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"superUserIds": ["a", "b"], "preferNewUserFields": ["email"]})
        );
    }
}
