//! Execution Sort Keys
//!
//! Sort keys are applied in insertion order; earlier keys take precedence.
//! Duplicate fields are passed through for the platform to resolve.

use serde::{Deserialize, Serialize};

/// A single sort key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSort {
    /// The execution field to sort by
    pub field: String,
    /// Ascending when true
    #[serde(rename = "asc")]
    pub ascending: bool,
}

impl ExecutionSort {
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    /// Create ascending sort
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    /// Create descending sort
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }
}
