use crate::commands::{print_json, Context};
use anyhow::Result;
use boardfilter_core::{CountDto, FilterContext, FilterReportDto, LeaderboardRow};
use clap::Args;
use tracing::debug;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Search query, e.g. "resnet and alice or vgg"
    #[arg(default_value = "")]
    pub query: String,
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct CountArgs {
    #[arg(default_value = "")]
    pub query: String,
}

pub fn filter_rows(ctx: &Context<'_>, args: FilterArgs) -> Result<()> {
    let rows = ctx.load_rows()?;
    let view = build_view(ctx, &rows, &args.query);
    let report = FilterReportDto::from_context(&view, args.limit);
    debug!(
        matched = report.matched,
        total = report.total,
        "filter pass complete"
    );

    if ctx.json {
        print_json(&report)?;
        return Ok(());
    }

    if report.matched == 0 {
        println!("no matching rows");
        return Ok(());
    }

    for row in &report.rows {
        let score = row
            .score
            .map(|score| format!("{score:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let submitter = if row.submitter.is_empty() {
            "-"
        } else {
            &row.submitter
        };
        println!("{}  {}  {}", row.name, submitter, score);
    }
    if report.rows.len() < report.matched {
        println!("({} of {} matches shown)", report.rows.len(), report.matched);
    }

    Ok(())
}

pub fn count_rows(ctx: &Context<'_>, args: CountArgs) -> Result<()> {
    let rows = ctx.load_rows()?;
    let view = build_view(ctx, &rows, &args.query);
    let count = CountDto {
        matched: view.visible_count(),
        total: view.total(),
    };

    if ctx.json {
        print_json(&count)?;
    } else {
        println!("{}/{}", count.matched, count.total);
    }
    Ok(())
}

fn build_view<'a>(
    ctx: &Context<'_>,
    rows: &'a [LeaderboardRow],
    query: &str,
) -> FilterContext<'a, LeaderboardRow> {
    let mut view = FilterContext::new(rows, &ctx.config.search.fields);
    view.set_policy(ctx.config.search.empty_terms);
    view.set_query(query);
    view
}
