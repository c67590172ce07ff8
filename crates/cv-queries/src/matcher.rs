//! Execution Matcher
//!
//! Fluent API for constructing execution queries. Predicates are split into
//! `filters` (must match) and `must_not` (must not match). [`ExecutionMatcher::not`]
//! marks the predicate committed next as negated, so both
//! `where_field("a").not().equals(..)` and `not().where_field("a").equals(..)`
//! negate `a`.

use cv_core::error::QueryError;
use cv_core::pagination::Pagination;
use cv_core::result::QueryResult;

use crate::filters::{ExecutionOperation, ExecutionQueryItem};
use crate::query::ExecutionQuery;
use crate::sorts::ExecutionSort;

/// Builder for constructing execution queries fluently
#[derive(Debug, Clone, Default)]
pub struct ExecutionMatcher {
    filters: Vec<ExecutionQueryItem>,
    must_not: Vec<ExecutionQueryItem>,
    sort: Vec<ExecutionSort>,
    page: Pagination,
    current: Option<ExecutionQueryItem>,
    negate_next: bool,
}

impl ExecutionMatcher {
    /// Create a new matcher with the default page of 10
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a predicate on `field`, committing the pending one
    pub fn where_field(&mut self, field: &str) -> QueryResult<&mut Self> {
        let field = field.trim();
        if field.is_empty() {
            return Err(QueryError::blank_field());
        }

        self.commit();
        self.current = Some(ExecutionQueryItem::new(field));

        Ok(self)
    }

    /// Route the next committed predicate to `must_not`
    pub fn not(&mut self) -> &mut Self {
        self.negate_next = true;
        self
    }

    /// Set the limit on results
    pub fn set_limit(&mut self, limit: i64) -> &mut Self {
        self.page.limit = limit;
        self
    }

    /// Set the offset on results
    pub fn set_offset(&mut self, offset: i64) -> &mut Self {
        self.page.offset = offset;
        self
    }

    /// Sort by `field` ascending, after any existing sort keys
    pub fn sort_asc(&mut self, field: impl Into<String>) -> &mut Self {
        self.sort.push(ExecutionSort::asc(field));
        self
    }

    /// Sort by `field` descending, after any existing sort keys
    pub fn sort_desc(&mut self, field: impl Into<String>) -> &mut Self {
        self.sort.push(ExecutionSort::desc(field));
        self
    }

    /// Field equals one of `values`
    ///
    /// Repeated calls accumulate values on the pending predicate.
    pub fn equals<I, S>(&mut self, values: I) -> QueryResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let item = self.pending("equals")?;
        item.operation = ExecutionOperation::Equals;
        item.values.extend(values.into_iter().map(Into::into));
        Ok(self)
    }

    /// Execution data has the field
    pub fn exists(&mut self) -> QueryResult<&mut Self> {
        self.pending("exists")?.operation = ExecutionOperation::Exists;
        Ok(self)
    }

    /// Field starts with `prefix`
    pub fn has_prefix(&mut self, prefix: impl Into<String>) -> QueryResult<&mut Self> {
        let item = self.pending("hasPrefix")?;
        item.operation = ExecutionOperation::HasPrefix;
        item.values = vec![prefix.into()];
        Ok(self)
    }

    /// Field lies in `(low, high)`, or `[low, high]` when `inclusive`
    pub fn between(
        &mut self,
        low: impl Into<String>,
        high: impl Into<String>,
        inclusive: bool,
    ) -> QueryResult<&mut Self> {
        let item = self.pending("between")?;
        item.operation = if inclusive {
            ExecutionOperation::BetweenInclusive
        } else {
            ExecutionOperation::BetweenExclusive
        };
        item.lower_bound = Some(low.into());
        item.upper_bound = Some(high.into());
        Ok(self)
    }

    /// Commit the pending predicate and produce the query document
    pub fn build(&mut self) -> ExecutionQuery {
        self.commit();
        self.negate_next = false;

        ExecutionQuery {
            filters: self.filters.clone(),
            must_not: self.must_not.clone(),
            sort: self.sort.clone(),
            limit: self.page.limit,
            offset: self.page.offset,
        }
    }

    // The negation flag is consumed by the commit it routes.
    fn commit(&mut self) {
        if let Some(item) = self.current.take() {
            if self.negate_next {
                self.must_not.push(item);
            } else {
                self.filters.push(item);
            }
            self.negate_next = false;
        }
    }

    fn pending(&mut self, operation: &'static str) -> QueryResult<&mut ExecutionQueryItem> {
        self.current
            .as_mut()
            .ok_or_else(|| QueryError::no_pending(operation))
    }
}
