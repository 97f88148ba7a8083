mod ast;
mod eval;
mod parser;

use crate::domain::{SearchField, Searchable};

pub use ast::SearchExpr;
pub use eval::{evaluate, EmptyTermPolicy};
pub use parser::parse_query;

/// A raw query together with its parsed expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    query: String,
    expr: Option<SearchExpr>,
    policy: EmptyTermPolicy,
}

impl QueryFilter {
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let expr = parse_query(&query);
        Self {
            query,
            expr,
            policy: EmptyTermPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: EmptyTermPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn expression(&self) -> Option<&SearchExpr> {
        self.expr.as_ref()
    }

    pub fn policy(&self) -> EmptyTermPolicy {
        self.policy
    }

    pub fn is_unfiltered(&self) -> bool {
        self.expr.is_none()
    }

    pub fn matches_text(&self, searchable_text: &str) -> bool {
        match &self.expr {
            Some(expr) => expr.matches_with(searchable_text, self.policy),
            None => true,
        }
    }

    pub fn matches<R: Searchable + ?Sized>(&self, row: &R, fields: &[SearchField]) -> bool {
        if self.is_unfiltered() {
            return true;
        }
        self.matches_text(&row.searchable_text(fields))
    }
}
