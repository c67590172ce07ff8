//! # cv-queries
//!
//! Query construction for Convai RS.
//!
//! This crate builds the declarative query documents that the platform
//! evaluates. Nothing here runs a query; the documents are serialized and
//! submitted by `cv-api`.
//!
//! ## Structure
//!
//! - `filters` - Predicates and operations for users and executions
//! - `sorts` - Sort keys for execution queries
//! - `query` - The immutable query documents
//! - `builder` - Fluent builder for user queries
//! - `matcher` - Fluent matcher for execution queries
//!
//! ## Example
//!
//! ```
//! use cv_queries::{ExecutionMatcher, UserQueryBuilder, UserQueryOperation};
//!
//! let users = UserQueryBuilder::any()
//!     .where_field("country")?
//!     .equals(["NL", "BE"])?
//!     .where_field("email")?
//!     .exists()?
//!     .build();
//!
//! assert_eq!(users.checks.len(), 2);
//! assert_eq!(users.checks[1].operation, UserQueryOperation::Exists);
//!
//! let executions = ExecutionMatcher::new()
//!     .where_field("channel")?
//!     .equals(["telegram"])?
//!     .where_field("text")?
//!     .not()
//!     .has_prefix("/start")?
//!     .sort_desc("startTime")
//!     .set_limit(50)
//!     .build();
//!
//! assert_eq!(executions.filters.len(), 1);
//! assert_eq!(executions.must_not.len(), 1);
//! # Ok::<(), cv_core::QueryError>(())
//! ```

pub mod filters;
pub mod sorts;
pub mod query;
pub mod builder;
pub mod matcher;

// Re-exports for convenience
pub use filters::{ExecutionOperation, ExecutionQueryItem, QueryCheck, UserQueryOperation};
pub use sorts::ExecutionSort;
pub use query::{ExecutionQuery, UserQuery, UserQueryMode};
pub use builder::UserQueryBuilder;
pub use matcher::ExecutionMatcher;
