//! Reader search results command.

use anyhow::{Context as _, Result};
use shopkit_reader::{search_results_view, FeedSearchResult, SearchResultsView};

use super::{ReaderArgs, ReaderCommand};
use crate::context::Context;

/// Run the reader command.
pub async fn run(args: ReaderArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ReaderCommand::SearchResults { results, show_more } => {
            search_results(&results, show_more, ctx)
        }
    }
}

/// Reads a search response; `null` means the search has not returned.
fn search_results(path: &str, show_more: bool, ctx: &Context) -> Result<()> {
    let content = ctx.read_input(path)?;
    let results: Option<Vec<FeedSearchResult>> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse search results: {}", path))?;

    let view = search_results_view(results.as_deref(), show_more);

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    match view {
        SearchResultsView::Placeholder => ctx.output.info("Searching..."),
        SearchResultsView::NoResults { message } => ctx.output.info(message),
        SearchResultsView::Preview {
            items,
            show_more_label,
        } => {
            ctx.output.header("Search results");
            ctx.output.table_row(&["FEED", "SITE", "URL"], &[10, 10, 50]);
            for item in &items {
                ctx.output.table_row(
                    &[
                        &item.feed_id.to_string(),
                        &site_column(item.site_id),
                        &item.url,
                    ],
                    &[10, 10, 50],
                );
            }
            ctx.output.info(&format!("[{}]", show_more_label));
        }
        SearchResultsView::Full {
            sites,
            remote_total_count,
        } => {
            ctx.output.header(&format!(
                "Search results ({} of up to {})",
                sites.len(),
                remote_total_count
            ));
            for site in &sites {
                ctx.output.list_item(&site.url);
            }
        }
    }

    Ok(())
}

fn site_column(site_id: Option<u64>) -> String {
    site_id.map_or_else(|| "-".to_string(), |id| id.to_string())
}
