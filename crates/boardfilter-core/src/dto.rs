use crate::context::FilterContext;
use crate::domain::LeaderboardRow;
use crate::query::SearchExpr;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowMatchDto {
    pub index: usize,
    pub name: String,
    pub submitter: String,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterReportDto {
    pub query: String,
    pub expression: Option<SearchExpr>,
    pub total: usize,
    pub matched: usize,
    pub rows: Vec<RowMatchDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountDto {
    pub matched: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainDto {
    pub query: String,
    pub canonical: Option<String>,
    pub expression: Option<SearchExpr>,
    pub terms: Vec<String>,
}

impl RowMatchDto {
    pub fn from_row(index: usize, row: &LeaderboardRow) -> Self {
        Self {
            index,
            name: row.name.clone(),
            submitter: row.submitter.clone(),
            score: row.score,
        }
    }
}

impl FilterReportDto {
    /// Builds a report of the context's visible rows, keeping at most
    /// `limit` of them while still counting every match.
    pub fn from_context(ctx: &FilterContext<'_, LeaderboardRow>, limit: Option<usize>) -> Self {
        let mut matched = 0;
        let mut rows = Vec::new();
        for (index, row) in ctx.visible() {
            matched += 1;
            if limit.map_or(true, |limit| rows.len() < limit) {
                rows.push(RowMatchDto::from_row(index, row));
            }
        }
        Self {
            query: ctx.filter().query().to_string(),
            expression: ctx.filter().expression().cloned(),
            total: ctx.total(),
            matched,
            rows,
        }
    }
}

impl ExplainDto {
    pub fn new(query: &str, expression: Option<SearchExpr>) -> Self {
        Self {
            query: query.to_string(),
            canonical: expression.as_ref().map(ToString::to_string),
            terms: expression
                .as_ref()
                .map(|expr| expr.terms().into_iter().map(str::to_string).collect())
                .unwrap_or_default(),
            expression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExplainDto, FilterReportDto};
    use crate::context::FilterContext;
    use crate::domain::{LeaderboardRow, DEFAULT_SEARCH_FIELDS};
    use crate::query::parse_query;

    #[test]
    fn report_counts_matches_beyond_limit() {
        let data: Vec<LeaderboardRow> = ["resnet18", "resnet34", "vgg16", "resnet50"]
            .into_iter()
            .map(|name| LeaderboardRow {
                name: name.to_string(),
                submitter: "alice".to_string(),
                score: Some(1.0),
            })
            .collect();
        let mut ctx = FilterContext::new(&data, &DEFAULT_SEARCH_FIELDS);
        ctx.set_query("resnet");

        let report = FilterReportDto::from_context(&ctx, Some(2));
        assert_eq!(report.matched, 3);
        assert_eq!(report.total, 4);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1].index, 1);
        assert_eq!(report.query, "resnet");
    }

    #[test]
    fn explain_lists_canonical_form_and_terms() {
        let query = "ResNet  AND not Bob";
        let dto = ExplainDto::new(query, parse_query(query));
        assert_eq!(dto.canonical.as_deref(), Some("resnet and not bob"));
        assert_eq!(dto.terms, vec!["resnet".to_string(), "bob".to_string()]);
    }

    #[test]
    fn explain_blank_query_has_no_expression() {
        let dto = ExplainDto::new(" ", parse_query(" "));
        assert!(dto.expression.is_none());
        assert!(dto.canonical.is_none());
        assert!(dto.terms.is_empty());
    }
}
