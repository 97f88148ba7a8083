use crate::query::ast::SearchExpr;
use serde::{Deserialize, Serialize};

/// How a `Term("")` left behind by a dangling operator is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyTermPolicy {
    /// Substring semantics: the empty string is contained in every text.
    #[default]
    MatchAll,
    MatchNone,
}

/// Decides whether `searchable_text` satisfies `expr`.
///
/// `None` is the unfiltered query and matches everything. Both sides are
/// expected to be lower-cased already.
pub fn evaluate(expr: Option<&SearchExpr>, searchable_text: &str) -> bool {
    match expr {
        Some(expr) => expr.matches_with(searchable_text, EmptyTermPolicy::MatchAll),
        None => true,
    }
}

impl SearchExpr {
    pub fn matches(&self, searchable_text: &str) -> bool {
        self.matches_with(searchable_text, EmptyTermPolicy::MatchAll)
    }

    pub fn matches_with(&self, searchable_text: &str, policy: EmptyTermPolicy) -> bool {
        match self {
            Self::Term(text) if text.is_empty() => policy == EmptyTermPolicy::MatchAll,
            Self::Term(text) => searchable_text.contains(text.as_str()),
            Self::Not(inner) => !inner.matches_with(searchable_text, policy),
            Self::And(parts) => parts
                .iter()
                .all(|part| part.matches_with(searchable_text, policy)),
            Self::Or(parts) => parts
                .iter()
                .any(|part| part.matches_with(searchable_text, policy)),
        }
    }
}
