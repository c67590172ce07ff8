//! User creation requests
//!
//! The user creation endpoints use snake_case field names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::session::Session;

/// A channel user to create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChannelUser {
    pub channel: String,
    pub channel_id: String,
    #[serde(default)]
    pub session: Session,
}

/// Create a super user together with its channel users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCombinedUserRequest {
    pub environment_id: String,
    #[serde(default)]
    pub user_data: Value,
    pub channel_users: Vec<CreateChannelUser>,
}

/// Attach channel users to an existing super user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChannelUsersRequest {
    pub environment_id: String,
    pub super_user_id: String,
    pub channel_users: Vec<CreateChannelUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCombinedUserResult {
    /// The super user ID
    pub id: String,
    /// The channel user IDs
    pub users: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChannelUsersResult {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_combined_request_wire_format() {
        let req = CreateCombinedUserRequest {
            environment_id: "env-1".to_string(),
            user_data: json!({"name": "Ann"}),
            channel_users: vec![CreateChannelUser {
                channel: "telegram".to_string(),
                channel_id: "tg-42".to_string(),
                session: Session::new(),
            }],
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["environment_id"], "env-1");
        assert_eq!(value["user_data"]["name"], "Ann");
        assert_eq!(value["channel_users"][0]["channel_id"], "tg-42");
    }
}
