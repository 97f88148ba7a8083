use crate::query::ast::SearchExpr;
use regex::Regex;
use std::sync::LazyLock;

static OR_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+or(?:\s+|$)").unwrap());
static AND_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+and(?:\s+|$)").unwrap());

const NOT_WORD: &str = "not";
const NOT_PREFIX: &str = "not ";

/// Parses a free-text query into a [`SearchExpr`].
///
/// Returns `None` for blank input, meaning every row matches. Any other
/// input is accepted: `or` binds loosest, `and` tighter, and a leading
/// `not ` negates a single term. Operators only count when surrounded by
/// whitespace or end the query, so `coral` or `android` stay plain terms.
/// A dangling operator (`resnet and`) leaves an empty term behind.
/// Singleton `Or` and `And` groups collapse to their only operand.
pub fn parse_query(input: &str) -> Option<SearchExpr> {
    if input.trim().is_empty() {
        return None;
    }

    let lowered = input.to_lowercase();
    if lowered.trim() == NOT_WORD {
        return Some(SearchExpr::term(NOT_WORD));
    }
    let mut segments: Vec<SearchExpr> = OR_SPLIT.split(&lowered).map(parse_segment).collect();

    if segments.len() == 1 {
        Some(segments.swap_remove(0))
    } else {
        Some(SearchExpr::Or(segments))
    }
}

fn parse_segment(segment: &str) -> SearchExpr {
    let mut operands: Vec<SearchExpr> = AND_SPLIT.split(segment).map(parse_operand).collect();

    if operands.len() == 1 {
        operands.swap_remove(0)
    } else {
        SearchExpr::And(operands)
    }
}

fn parse_operand(raw: &str) -> SearchExpr {
    let trimmed = raw.trim();
    if trimmed == NOT_WORD {
        return SearchExpr::negate(SearchExpr::term(""));
    }
    match trimmed.strip_prefix(NOT_PREFIX) {
        Some(rest) => SearchExpr::negate(SearchExpr::term(rest.trim())),
        None => SearchExpr::term(trimmed),
    }
}
