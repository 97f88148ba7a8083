use crate::commands::{print_json, Context};
use anyhow::Result;
use boardfilter_core::{parse_query, ExplainDto, SearchExpr};
use clap::Args;

#[derive(Debug, Args)]
pub struct ExplainArgs {
    pub query: String,
}

pub fn explain_query(ctx: &Context<'_>, args: ExplainArgs) -> Result<()> {
    let dto = ExplainDto::new(&args.query, parse_query(&args.query));

    if ctx.json {
        print_json(&dto)?;
        return Ok(());
    }

    match &dto.expression {
        Some(expr) => {
            println!("query: {}", dto.canonical.as_deref().unwrap_or_default());
            print!("{}", render_tree(expr));
        }
        None => println!("empty query: every row matches"),
    }
    Ok(())
}

fn render_tree(expr: &SearchExpr) -> String {
    let mut out = String::new();
    render_node(expr, 0, &mut out);
    out
}

fn render_node(expr: &SearchExpr, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match expr {
        SearchExpr::Term(text) => out.push_str(&format!("{indent}term {text:?}\n")),
        SearchExpr::Not(inner) => {
            out.push_str(&format!("{indent}not\n"));
            render_node(inner, depth + 1, out);
        }
        SearchExpr::And(parts) | SearchExpr::Or(parts) => {
            let label = if matches!(expr, SearchExpr::And(_)) {
                "and"
            } else {
                "or"
            };
            out.push_str(&format!("{indent}{label}\n"));
            for part in parts {
                render_node(part, depth + 1, out);
            }
        }
    }
}
