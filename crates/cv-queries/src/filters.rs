//! Query Filters
//!
//! A predicate is a single field/operation/operand condition. User queries
//! and execution queries each have their own operation set and wire shape.

use serde::{Deserialize, Serialize};

/// Operations available to user predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserQueryOperation {
    /// Field equals one of the values
    #[default]
    Equals,
    /// Field is present on the user
    Exists,
    /// Field is absent from the user
    NotExists,
    /// Field equals none of the values
    NotEquals,
    /// Field starts with one of the values
    StartsWith,
    /// Field is greater than the value
    GreaterThan,
    /// Field is less than the value
    LessThan,
}

impl UserQueryOperation {
    /// Check if this operation compares against operands
    pub fn requires_values(&self) -> bool {
        !matches!(self, Self::Exists | Self::NotExists)
    }
}

/// A single user predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCheck {
    /// The user data key being checked
    pub field: String,
    /// The operation to apply
    pub operation: UserQueryOperation,
    /// Comparison operands
    pub values: Vec<String>,
}

impl QueryCheck {
    /// Create an equals check with no operands yet
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operation: UserQueryOperation::Equals,
            values: Vec::new(),
        }
    }

    /// Check if this predicate is complete
    pub fn is_valid(&self) -> bool {
        if self.field.trim().is_empty() {
            return false;
        }

        !self.operation.requires_values() || !self.values.is_empty()
    }
}

/// Operations available to execution predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionOperation {
    #[default]
    Equals,
    Exists,
    /// Open interval (low, high)
    BetweenExclusive,
    /// Closed interval [low, high]
    BetweenInclusive,
    HasPrefix,
}

/// A single execution predicate
///
/// Range operations carry bounds instead of values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionQueryItem {
    #[serde(rename = "op")]
    pub operation: ExecutionOperation,

    pub field: String,

    #[serde(rename = "matcher", default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
}

impl ExecutionQueryItem {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        if self.field.trim().is_empty() {
            return false;
        }

        match self.operation {
            ExecutionOperation::Equals | ExecutionOperation::HasPrefix => !self.values.is_empty(),
            ExecutionOperation::Exists => true,
            ExecutionOperation::BetweenExclusive | ExecutionOperation::BetweenInclusive => {
                self.lower_bound.is_some() && self.upper_bound.is_some()
            }
        }
    }
}
