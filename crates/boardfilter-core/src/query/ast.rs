use serde::Serialize;
use std::fmt;

/// Parsed boolean search query.
///
/// Trees produced by [`parse_query`](crate::query::parse_query) are at most
/// two levels deep: an `Or` of `And`/`Term`/`Not` nodes, where every `And`
/// operand is a `Term` or a `Not`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SearchExpr {
    Term(String),
    Not(Box<SearchExpr>),
    And(Vec<SearchExpr>),
    Or(Vec<SearchExpr>),
}

impl SearchExpr {
    pub fn term(text: impl Into<String>) -> Self {
        Self::Term(text.into())
    }

    pub fn negate(inner: SearchExpr) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Leaf terms in query order, including negated ones.
    pub fn terms(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Term(text) => out.push(text.as_str()),
            Self::Not(inner) => inner.collect_terms(out),
            Self::And(parts) | Self::Or(parts) => {
                for part in parts {
                    part.collect_terms(out);
                }
            }
        }
    }
}

impl fmt::Display for SearchExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(text) => f.write_str(text),
            Self::Not(inner) => write!(f, "not {}", inner),
            Self::And(parts) => write_joined(f, parts, " and "),
            Self::Or(parts) => write_joined(f, parts, " or "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[SearchExpr], sep: &str) -> fmt::Result {
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", part)?;
    }
    Ok(())
}
