use crate::domain::{SearchField, Searchable};
use crate::query::{EmptyTermPolicy, QueryFilter};
use tracing::debug;

/// Filter state for one table view: the rows it shows, the fields searched
/// and the active query.
#[derive(Debug)]
pub struct FilterContext<'a, R> {
    rows: &'a [R],
    fields: Vec<SearchField>,
    filter: QueryFilter,
}

impl<'a, R: Searchable> FilterContext<'a, R> {
    pub fn new(rows: &'a [R], fields: &[SearchField]) -> Self {
        Self {
            rows,
            fields: fields.to_vec(),
            filter: QueryFilter::default(),
        }
    }

    /// Replaces the active query. Returns `false` when the text is unchanged
    /// and nothing was re-parsed.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.filter.query() == query {
            return false;
        }
        let policy = self.filter.policy();
        self.filter = QueryFilter::new(query).with_policy(policy);
        match self.filter.expression() {
            Some(expr) => debug!(query, expr = %expr, "query parsed"),
            None => debug!("query cleared"),
        }
        true
    }

    pub fn set_policy(&mut self, policy: EmptyTermPolicy) {
        self.filter = self.filter.clone().with_policy(policy);
    }

    pub fn filter(&self) -> &QueryFilter {
        &self.filter
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    pub fn rows(&self) -> &'a [R] {
        self.rows
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Matching rows with their source index, in source order.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &'a R)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| self.filter.matches(*row, &self.fields))
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }
}
