//! Query Documents
//!
//! The immutable output of the builders. These are what gets serialized and
//! sent to the platform.

use cv_core::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use serde::{Deserialize, Serialize};

use crate::filters::{ExecutionQueryItem, QueryCheck};
use crate::sorts::ExecutionSort;

/// How the checks of a user query combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserQueryMode {
    /// At least one check must hold
    Any,
    /// Every check must hold
    #[default]
    All,
    /// No check may hold
    None,
}

impl UserQueryMode {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "any" => Some(Self::Any),
            "all" => Some(Self::All),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn default_offset() -> i64 {
    DEFAULT_OFFSET
}

/// A user query document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub mode: UserQueryMode,
    pub checks: Vec<QueryCheck>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_offset")]
    pub offset: i64,
}

impl UserQuery {
    /// Whether every check carries the operands its operation needs
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.is_valid())
    }
}

/// An execution query document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionQuery {
    /// Predicates that must match
    pub filters: Vec<ExecutionQueryItem>,
    /// Predicates that must not match
    pub must_not: Vec<ExecutionQueryItem>,
    pub sort: Vec<ExecutionSort>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_offset")]
    pub offset: i64,
}

impl ExecutionQuery {
    pub fn is_valid(&self) -> bool {
        self.filters
            .iter()
            .chain(self.must_not.iter())
            .all(|item| item.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ExecutionOperation, UserQueryOperation};
    use serde_json::json;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(UserQueryMode::from_str("ANY"), Some(UserQueryMode::Any));
        assert_eq!(UserQueryMode::from_str("none"), Some(UserQueryMode::None));
        assert_eq!(UserQueryMode::from_str("some"), None);
        assert_eq!(UserQueryMode::default(), UserQueryMode::All);
    }

    #[test]
    fn test_user_query_wire_format() {
        let query = UserQuery {
            mode: UserQueryMode::Any,
            checks: vec![QueryCheck {
                field: "name".to_string(),
                operation: UserQueryOperation::StartsWith,
                values: vec!["Jo".to_string()],
            }],
            limit: 10,
            offset: 20,
        };

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "mode": "ANY",
                "checks": [{"field": "name", "operation": "STARTS_WITH", "values": ["Jo"]}],
                "limit": 10,
                "offset": 20
            })
        );
    }

    #[test]
    fn test_user_query_pagination_defaults_on_decode() {
        let query: UserQuery = serde_json::from_value(json!({
            "mode": "NONE",
            "checks": []
        }))
        .unwrap();

        assert_eq!(query.limit, 10);
        assert_eq!(query.offset, 0);
        assert!(query.checks.is_empty());
    }

    #[test]
    fn test_execution_query_wire_format() {
        let query = ExecutionQuery {
            filters: vec![],
            must_not: vec![ExecutionQueryItem {
                operation: ExecutionOperation::Exists,
                ..ExecutionQueryItem::new("errors")
            }],
            sort: vec![ExecutionSort::desc("startTime")],
            limit: 5,
            offset: 0,
        };

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "filters": [],
                "mustNot": [{"op": "EXISTS", "field": "errors"}],
                "sort": [{"field": "startTime", "asc": false}],
                "limit": 5,
                "offset": 0
            })
        );
        assert!(query.is_valid());
    }
}
