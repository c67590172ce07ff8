//! # cv-models
//!
//! Request and response shapes exchanged with the Convai platform.
//!
//! These are plain data carriers. The only behavior lives in
//! [`ContextModifier`], which records changes to be applied to a [`Context`].

pub mod flaggable;
pub mod session;
pub mod context;
pub mod context_modifier;
pub mod response;
pub mod execution;
pub mod user;
pub mod broadcast;
pub mod trigger;
pub mod create_users;

pub use flaggable::Flaggable;
pub use session::{Frame, Session, Stack};
pub use context::{Context, RequestUser};
pub use context_modifier::{
    ChangeOperation, ChangeScope, ContextChange, ContextModifier, ErrorSource, ExecutionError,
    LogEntry, LogLevel,
};
pub use response::{Message, Response};
pub use execution::{Execution, ExecutionLog, ExecutionQueryResult};
pub use user::{
    ChannelUser, MergeUsersRequest, SuperUser, UpdateUserDataInput, UserQueryReachableResult,
    UserQueryResult,
};
pub use broadcast::{BroadcastInput, BroadcastResult};
pub use trigger::TriggerRequest;
pub use create_users::{
    CreateChannelUser, CreateChannelUsersRequest, CreateChannelUsersResult,
    CreateCombinedUserRequest, CreateCombinedUserResult,
};
