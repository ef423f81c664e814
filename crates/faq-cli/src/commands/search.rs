use faq_core::{SearchResultsResponse, UnifiedEntry};
use faq_query::FaqFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{FilterArgs, SearchArgs};
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

/// Handle `faq search`.
pub fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let results = ctx.catalog.unified().search(&args.query);
    output(&response(&args.query, results, limit), flags.format)
}

/// Handle `faq filter`.
pub fn handle_filter(
    args: &FilterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let results = ctx.catalog.unified().filter(&to_filter(args));
    let query = args.search.as_deref().unwrap_or_default();
    output(&response(query, results, limit), flags.format)
}

fn to_filter(args: &FilterArgs) -> FaqFilter {
    FaqFilter {
        audience: args.audience,
        category: args.category.clone(),
        search: args.search.clone(),
    }
}

fn response(query: &str, results: Vec<UnifiedEntry>, limit: usize) -> SearchResultsResponse {
    tracing::debug!(query, matches = results.len(), "search complete");
    SearchResultsResponse {
        query: query.to_string(),
        total_results: results.len(),
        results: take(results, limit),
    }
}
