//! Query documents and the endpoints that evaluate them

use cv_models::{ExecutionQueryResult, UserQueryResult};
use cv_queries::{ExecutionQuery, UserQuery};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A serializable query the platform evaluates remotely
pub trait QueryDocument: Serialize + Send + Sync {
    /// Page of matches returned for this document
    type Output: DeserializeOwned + Send;

    /// Endpoint path segments, relative to the API root
    const PATH: &'static [&'static str];

    /// Whether every predicate carries the operands its operation needs
    fn is_complete(&self) -> bool;
}

impl QueryDocument for UserQuery {
    type Output = UserQueryResult;
    const PATH: &'static [&'static str] = &["users", "super", "query"];

    fn is_complete(&self) -> bool {
        self.is_valid()
    }
}

impl QueryDocument for ExecutionQuery {
    type Output = ExecutionQueryResult;
    const PATH: &'static [&'static str] = &["executions", "query"];

    fn is_complete(&self) -> bool {
        self.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_queries::{ExecutionMatcher, UserQueryBuilder};

    #[test]
    fn test_is_complete() {
        let complete = UserQueryBuilder::default()
            .where_field("email").unwrap().exists().unwrap()
            .build();
        assert!(complete.is_complete());

        let dangling = UserQueryBuilder::default().where_field("plan").unwrap().build();
        assert!(!dangling.is_complete());

        let range = ExecutionMatcher::new()
            .where_field("executionDuration").unwrap().between("1", "5", false).unwrap()
            .build();
        assert!(range.is_complete());

        let bare = ExecutionMatcher::new().where_field("channel").unwrap().build();
        assert!(!bare.is_complete());
    }
}
