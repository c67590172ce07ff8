//! Result type aliases

use crate::error::{ConvaiError, QueryError};

/// Standard Result type for client operations
pub type CvResult<T> = Result<T, ConvaiError>;

/// Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;
