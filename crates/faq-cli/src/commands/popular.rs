use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

/// Handle `faq popular`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    output(&take(ctx.catalog.unified().popular(), limit), flags.format)
}

/// Handle `faq frequent`.
pub fn handle_frequent(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    output(
        &take(ctx.catalog.unified().most_frequent(), limit),
        flags.format,
    )
}
