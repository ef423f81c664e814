use faq_core::{Audience, UnifiedEntry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

/// Handle `faq list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let audience = args.audience.or(ctx.config.general.default_audience);
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    output(&take(entries(ctx, audience), limit), flags.format)
}

fn entries(ctx: &AppContext, audience: Option<Audience>) -> Vec<UnifiedEntry> {
    let unified = ctx.catalog.unified();
    audience.map_or_else(|| unified.all(), |audience| unified.by_audience(audience))
}
