//! Remote operations exposed by the platform

use async_trait::async_trait;
use cv_core::result::CvResult;
use cv_models::{
    BroadcastInput, BroadcastResult, ChannelUser, Execution, ExecutionQueryResult,
    MergeUsersRequest, Session, SuperUser, TriggerRequest, UpdateUserDataInput,
    UserQueryReachableResult, UserQueryResult,
};
use cv_queries::{ExecutionQuery, UserQuery};

/// Platform API
///
/// Implemented by [`crate::ConvaiClient`]; code that only needs to talk to the
/// platform should depend on this trait so it can be swapped in tests.
#[async_trait]
pub trait ConvaiApi: Send + Sync {
    // Executions

    async fn query_executions(&self, query: &ExecutionQuery) -> CvResult<ExecutionQueryResult>;

    async fn trigger(&self, req: &TriggerRequest) -> CvResult<Execution>;

    async fn broadcast(&self, input: &BroadcastInput) -> CvResult<BroadcastResult>;

    // Users

    async fn query_users(&self, query: &UserQuery) -> CvResult<UserQueryResult>;

    /// Count the users a query would reach without fetching them
    async fn query_users_reachable(&self, query: &UserQuery) -> CvResult<UserQueryReachableResult>;

    async fn merge_users(&self, req: &MergeUsersRequest) -> CvResult<SuperUser>;

    async fn delete_super_user(&self, id: &str) -> CvResult<SuperUser>;

    async fn update_user_data(
        &self,
        super_user_id: &str,
        input: &UpdateUserDataInput,
    ) -> CvResult<SuperUser>;

    async fn delete_channel_user(&self, user_id: &str) -> CvResult<ChannelUser>;

    // Sessions

    async fn update_session(&self, user_id: &str, input: &UpdateUserDataInput) -> CvResult<Session>;

    async fn delete_session(&self, user_id: &str) -> CvResult<Session>;
}
