//! User Query Builder
//!
//! Provides a fluent API for constructing user queries. A predicate is opened
//! with [`UserQueryBuilder::where_field`] and stays pending until the next
//! `where_field` or [`UserQueryBuilder::build`] commits it.

use cv_core::error::QueryError;
use cv_core::pagination::Pagination;
use cv_core::result::QueryResult;

use crate::filters::{QueryCheck, UserQueryOperation};
use crate::query::{UserQuery, UserQueryMode};

/// Builder for constructing user queries fluently
#[derive(Debug, Clone)]
pub struct UserQueryBuilder {
    mode: UserQueryMode,
    checks: Vec<QueryCheck>,
    current: Option<QueryCheck>,
    page: Pagination,
}

impl Default for UserQueryBuilder {
    fn default() -> Self {
        Self::new(UserQueryMode::All, None)
    }
}

impl UserQueryBuilder {
    /// Create a new builder
    ///
    /// A missing or zero `limit` falls back to 10. The offset always starts at 0.
    pub fn new(mode: UserQueryMode, limit: Option<i64>) -> Self {
        Self {
            mode,
            checks: Vec::new(),
            current: None,
            page: Pagination::with_limit(limit),
        }
    }

    /// Every check must hold
    pub fn all() -> Self {
        Self::new(UserQueryMode::All, None)
    }

    /// At least one check must hold
    pub fn any() -> Self {
        Self::new(UserQueryMode::Any, None)
    }

    /// No check may hold
    pub fn none() -> Self {
        Self::new(UserQueryMode::None, None)
    }

    /// Set the offset on results
    pub fn set_offset(&mut self, offset: i64) -> &mut Self {
        self.page.offset = offset;
        self
    }

    /// Start a check on `field`, committing the pending one
    pub fn where_field(&mut self, field: &str) -> QueryResult<&mut Self> {
        let field = field.trim();
        if field.is_empty() {
            return Err(QueryError::blank_field());
        }

        if let Some(check) = self.current.take() {
            self.checks.push(check);
        }
        self.current = Some(QueryCheck::new(field));

        Ok(self)
    }

    /// Field equals one of `values`
    pub fn equals<I, S>(&mut self, values: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_operands("equals", UserQueryOperation::Equals, values)
    }

    /// Field equals none of `values`
    pub fn not_equals<I, S>(&mut self, values: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_operands("notEquals", UserQueryOperation::NotEquals, values)
    }

    /// Field starts with one of `values`
    pub fn starts_with<I, S>(&mut self, values: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_operands("startsWith", UserQueryOperation::StartsWith, values)
    }

    /// Field is greater than `values`
    pub fn greater_than<I, S>(&mut self, values: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_operands("greaterThan", UserQueryOperation::GreaterThan, values)
    }

    /// Field is less than `values`
    pub fn less_than<I, S>(&mut self, values: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_operands("lessThan", UserQueryOperation::LessThan, values)
    }

    /// User data has the field
    pub fn exists(&mut self) -> QueryResult<&mut Self> {
        self.pending("exists")?.operation = UserQueryOperation::Exists;
        Ok(self)
    }

    /// User data does not have the field
    pub fn not_exists(&mut self) -> QueryResult<&mut Self> {
        self.pending("notExists")?.operation = UserQueryOperation::NotExists;
        Ok(self)
    }

    /// Commit the pending check and produce the query document
    ///
    /// The builder keeps its state, so further checks may be chained and
    /// built again.
    pub fn build(&mut self) -> UserQuery {
        if let Some(check) = self.current.take() {
            self.checks.push(check);
        }

        UserQuery {
            mode: self.mode,
            checks: self.checks.clone(),
            limit: self.page.limit,
            offset: self.page.offset,
        }
    }

    fn pending(&mut self, operation: &'static str) -> QueryResult<&mut QueryCheck> {
        self.current
            .as_mut()
            .ok_or_else(|| QueryError::no_pending(operation))
    }

    // Operands replace whatever the pending check held before.
    fn set_operands<I, S>(
        &mut self,
        name: &'static str,
        operation: UserQueryOperation,
        values: I,
    ) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let check = self.pending(name)?;
        check.operation = operation;
        check.values = values.into_iter().map(Into::into).collect();
        Ok(self)
    }
}
