//! Pagination types for query documents
//!
//! Range validation is left to the platform; values are passed through as given.

use serde::{Deserialize, Serialize};

/// Default number of results per query
pub const DEFAULT_LIMIT: i64 = 10;

/// Default result offset
pub const DEFAULT_OFFSET: i64 = 0;

/// Limit/offset pair carried by every query document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Pagination {
    /// Build from an optional limit, falling back to the default for
    /// missing or zero values
    pub fn with_limit(limit: Option<i64>) -> Self {
        Self {
            limit: limit.filter(|l| *l != 0).unwrap_or(DEFAULT_LIMIT),
            offset: DEFAULT_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Pagination::default();
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_with_limit() {
        assert_eq!(Pagination::with_limit(None).limit, 10);
        assert_eq!(Pagination::with_limit(Some(0)).limit, 10);
        assert_eq!(Pagination::with_limit(Some(25)).limit, 25);
        assert_eq!(Pagination::with_limit(Some(-1)).limit, -1);
    }
}
